// OpenAI Whisper Python command line

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;
use tracing::info;

use crate::config::TranscriberConfig;
use crate::error::{AutosubError, Result};
use crate::segment::Segment;
use super::{Transcriber, common::{parse_engine_json, read_engine_json, run_engine}};

/// OpenAI Whisper `--output_format json` output
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIWhisperOutput {
    pub segments: Vec<OpenAIWhisperSegment>,
    pub language: Option<String>,
}

/// Timestamps are in seconds and may be null
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIWhisperSegment {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub text: String,
}

impl From<OpenAIWhisperOutput> for Vec<Segment> {
    fn from(output: OpenAIWhisperOutput) -> Self {
        output.segments
            .iter()
            .map(|seg| Segment::from_secs(seg.start, seg.end, &seg.text))
            .collect()
    }
}

pub fn parse_openai_output(content: &str) -> Result<Vec<Segment>> {
    let output: OpenAIWhisperOutput = parse_engine_json(content)?;
    Ok(output.into())
}

pub struct OpenAITranscriber {
    config: TranscriberConfig,
}

impl OpenAITranscriber {
    pub fn new(config: TranscriberConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Transcriber for OpenAITranscriber {
    async fn transcribe(&self, audio_path: &Path, language: &str) -> Result<Vec<Segment>> {
        info!("Transcribing {} with OpenAI Whisper ({})", audio_path.display(), language);

        let temp_dir = tempfile::tempdir()
            .map_err(|e| AutosubError::Transcription(format!("Failed to create temp directory: {}", e)))?;
        let output_dir = temp_dir.path();

        let mut cmd = Command::new(&self.config.binary_path);
        cmd.arg(audio_path)
            .arg("--model").arg(&self.config.model)
            .arg("--language").arg(language)
            .arg("--task").arg("transcribe")
            .arg("--output_format").arg("json")
            .arg("--output_dir").arg(output_dir);

        run_engine(cmd, &self.config.binary_path).await?;

        let audio_stem = audio_path.file_stem()
            .ok_or_else(|| AutosubError::Transcription("Invalid audio filename".to_string()))?;
        let json_file = output_dir.join(format!("{}.json", audio_stem.to_string_lossy()));

        let output: OpenAIWhisperOutput = read_engine_json(&json_file).await?;
        if let Some(detected) = &output.language {
            info!("Whisper reported language: {}", detected);
        }

        let segments: Vec<Segment> = output.into();
        info!("Transcription produced {} segments", segments.len());
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_segments_with_null_timestamps() {
        let json = r#"{
            "text": " Bom dia. Tudo bem?",
            "language": "pt",
            "segments": [
                {"id": 0, "seek": 0, "start": 0.0, "end": 1.52, "text": " Bom dia."},
                {"id": 1, "seek": 0, "start": 1.52, "end": null, "text": " Tudo bem?"}
            ]
        }"#;

        let segments = parse_openai_output(json).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Bom dia.");
        assert_eq!(segments[0].end, Duration::from_millis(1520));
        assert_eq!(segments[1].end, Duration::ZERO);
    }

    #[test]
    fn test_empty_segments() {
        let segments = parse_openai_output(r#"{"text": "", "segments": []}"#).unwrap();
        assert!(segments.is_empty());
    }
}
