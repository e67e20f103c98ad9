use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use crate::config::MediaConfig;
use crate::error::{AutosubError, Result};
use super::{MediaProcessor, MediaCommandBuilder};

/// ffmpeg-backed media processor
pub struct FfmpegProcessor {
    command_builder: MediaCommandBuilder,
}

impl FfmpegProcessor {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            command_builder: MediaCommandBuilder::new(config.binary_path),
        }
    }
}

#[async_trait]
impl MediaProcessor for FfmpegProcessor {
    async fn extract_audio(&self, input_path: &Path, audio_path: &Path) -> Result<()> {
        info!("Extracting audio from {} to {}", input_path.display(), audio_path.display());

        self.command_builder
            .extract_audio(input_path, audio_path)
            .execute(AutosubError::ExtractionFailed)
            .await?;

        info!("Audio extraction completed");
        Ok(())
    }

    async fn embed_subtitles(
        &self,
        video_path: &Path,
        subtitle_path: &Path,
        output_path: &Path,
    ) -> Result<()> {
        info!("Embedding subtitles from {} into {} -> {}",
              subtitle_path.display(), video_path.display(), output_path.display());

        self.command_builder
            .embed_subtitles(video_path, subtitle_path, output_path)
            .execute(AutosubError::EmbeddingFailed)
            .await?;

        info!("Subtitle embedding completed successfully");
        Ok(())
    }

    async fn check_availability(&self) -> Result<()> {
        self.command_builder
            .version_check()
            .execute(|e| AutosubError::Config(format!("Media processor not available: {}", e)))
            .await?;

        info!("Media processor is available");
        Ok(())
    }
}
