use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AutosubError, Result};
use crate::media::{is_audio_file, MediaProcessor, MediaProcessorFactory};
use crate::subtitle::{generate_srt, generate_transcript};
use crate::transcribe::{Transcriber, TranscriberFactory};
use crate::translate::{translate_segments, Translator, TranslatorFactory};

/// One subtitling run as requested on the command line
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub source_language: String,
    pub target_language: String,
    pub srt_only: bool,
}

/// Files a run leaves behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub subtitle_path: PathBuf,
    pub transcript_path: PathBuf,
    pub video_path: Option<PathBuf>,
}

/// Artifact paths derived from the requested output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub subtitle: PathBuf,
    pub transcript: PathBuf,
    pub video: PathBuf,
}

impl OutputPaths {
    /// `<base>.srt` and `<base>.txt`, where `<base>` is the output path
    /// without its extension
    pub fn for_output(output_path: &Path) -> Self {
        let base = output_path.with_extension("");
        Self {
            subtitle: append_extension(&base, "srt"),
            transcript: append_extension(&base, "txt"),
            video: output_path.to_path_buf(),
        }
    }
}

fn append_extension(base: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

pub struct Workflow {
    media: Box<dyn MediaProcessor>,
    transcriber: Box<dyn Transcriber>,
    translator: Box<dyn Translator>,
    temp_audio_path: PathBuf,
}

impl Workflow {
    pub fn new(config: Config) -> Result<Self> {
        let media = MediaProcessorFactory::create_processor(config.media.clone());
        let transcriber = TranscriberFactory::create_transcriber(config.transcriber.clone());
        let translator = TranslatorFactory::create_translator(config.translate.clone())?;

        Ok(Self::with_components(
            media,
            transcriber,
            translator,
            PathBuf::from(&config.media.temp_audio_path),
        ))
    }

    pub fn with_components(
        media: Box<dyn MediaProcessor>,
        transcriber: Box<dyn Transcriber>,
        translator: Box<dyn Translator>,
        temp_audio_path: PathBuf,
    ) -> Self {
        Self {
            media,
            transcriber,
            translator,
            temp_audio_path,
        }
    }

    /// Fail fast when the media tool is missing
    pub async fn check_dependencies(&self) -> Result<()> {
        self.media.check_availability().await
    }

    /// Run extract → transcribe → translate → serialize → (embed | skip).
    ///
    /// Cleanup runs whatever the outcome: the temp waveform is always removed,
    /// the subtitle file only when it was burned into a video in this run.
    pub async fn run(&self, request: &RunRequest) -> Result<RunOutcome> {
        let paths = OutputPaths::for_output(&request.output_path);
        let mut embedded = false;

        let result = self.run_stages(request, &paths, &mut embedded).await;
        self.cleanup(&paths, embedded).await;

        result
    }

    async fn run_stages(
        &self,
        request: &RunRequest,
        paths: &OutputPaths,
        embedded: &mut bool,
    ) -> Result<RunOutcome> {
        info!("Extracting audio...");
        self.media.extract_audio(&request.input_path, &self.temp_audio_path).await?;

        info!("Transcribing...");
        let segments = self.transcriber
            .transcribe(&self.temp_audio_path, &request.source_language)
            .await?;

        info!("Translating...");
        let translated = translate_segments(
            self.translator.as_ref(),
            &segments,
            &request.source_language,
            &request.target_language,
        )
        .await?;

        info!("Generating SRT...");
        generate_srt(&translated, &paths.subtitle).await?;
        generate_transcript(&translated, &paths.transcript).await?;

        let video_path = if request.srt_only {
            None
        } else if is_audio_file(&request.input_path) {
            info!("Audio input, skipping subtitle embedding");
            None
        } else {
            info!("Embedding subtitles...");
            self.media
                .embed_subtitles(&request.input_path, &paths.subtitle, &paths.video)
                .await?;
            *embedded = true;
            Some(paths.video.clone())
        };

        Ok(RunOutcome {
            subtitle_path: paths.subtitle.clone(),
            transcript_path: paths.transcript.clone(),
            video_path,
        })
    }

    async fn cleanup(&self, paths: &OutputPaths, embedded: bool) {
        remove_if_exists(&self.temp_audio_path).await;

        if embedded {
            remove_if_exists(&paths.subtitle).await;
        }
    }
}

async fn remove_if_exists(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => info!("Removed {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove {}: {}", path.display(), e),
    }
}
