// Media processing
//
// - Commands: argument builders for the ffmpeg invocations
// - Processor: ffmpeg-backed implementation of MediaProcessor

pub mod commands;
pub mod processor;

use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::Path;

pub use commands::*;
pub use processor::*;

use crate::config::MediaConfig;
use crate::error::Result;

/// Extensions treated as audio-only input
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "m4a", "aac", "ogg", "opus", "wma"];

/// Main trait for media processing operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaProcessor: Send + Sync {
    /// Produce the waveform used for transcription
    async fn extract_audio(&self, input_path: &Path, audio_path: &Path) -> Result<()>;

    /// Burn subtitles into video file
    async fn embed_subtitles(
        &self,
        video_path: &Path,
        subtitle_path: &Path,
        output_path: &Path,
    ) -> Result<()>;

    /// Check if media processor is available
    async fn check_availability(&self) -> Result<()>;
}

/// Check if the file is an audio file based on extension
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Factory for creating media processor instances
pub struct MediaProcessorFactory;

impl MediaProcessorFactory {
    pub fn create_processor(config: MediaConfig) -> Box<dyn MediaProcessor> {
        Box::new(FfmpegProcessor::new(config))
    }
}
