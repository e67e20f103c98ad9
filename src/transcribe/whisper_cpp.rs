use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::info;

use crate::config::TranscriberConfig;
use crate::error::{AutosubError, Result};
use crate::segment::Segment;
use super::{Transcriber, common::{parse_engine_json, read_engine_json, run_engine}};

/// whisper.cpp `-oj` output
#[derive(Debug, Clone, Deserialize)]
pub struct WhisperCppOutput {
    pub transcription: Vec<WhisperCppSegment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperCppSegment {
    pub offsets: WhisperCppOffsets,
    pub text: String,
}

/// Segment bounds in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct WhisperCppOffsets {
    pub from: i64,
    pub to: i64,
}

impl From<WhisperCppOutput> for Vec<Segment> {
    fn from(output: WhisperCppOutput) -> Self {
        output.transcription
            .into_iter()
            .map(|seg| Segment::new(
                Duration::from_millis(seg.offsets.from.max(0) as u64),
                Duration::from_millis(seg.offsets.to.max(0) as u64),
                seg.text.trim(),
            ))
            .collect()
    }
}

pub fn parse_whisper_cpp_output(content: &str) -> Result<Vec<Segment>> {
    let output: WhisperCppOutput = parse_engine_json(content)?;
    Ok(output.into())
}

pub struct WhisperCppTranscriber {
    config: TranscriberConfig,
}

impl WhisperCppTranscriber {
    pub fn new(config: TranscriberConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Transcriber for WhisperCppTranscriber {
    async fn transcribe(&self, audio_path: &Path, language: &str) -> Result<Vec<Segment>> {
        info!("Transcribing {} with whisper.cpp ({})", audio_path.display(), language);

        let temp_dir = tempfile::tempdir()
            .map_err(|e| AutosubError::Transcription(format!("Failed to create temp directory: {}", e)))?;
        let output_base = temp_dir.path().join("transcript");

        let mut cmd = Command::new(&self.config.binary_path);
        cmd.arg("-m").arg(&self.config.model)
            .arg("-f").arg(audio_path)
            .arg("-l").arg(language)
            .arg("-oj")
            .arg("-of").arg(&output_base);

        run_engine(cmd, &self.config.binary_path).await?;

        let output: WhisperCppOutput = read_engine_json(&output_base.with_extension("json")).await?;
        let segments: Vec<Segment> = output.into();

        info!("Transcription produced {} segments", segments.len());
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offsets() {
        let json = r#"{
            "result": {"language": "en"},
            "transcription": [
                {"timestamps": {"from": "00:00:00,000", "to": "00:00:02,340"},
                 "offsets": {"from": 0, "to": 2340}, "text": " Hello there."},
                {"timestamps": {"from": "00:00:02,340", "to": "00:00:05,000"},
                 "offsets": {"from": 2340, "to": 5000}, "text": " General Kenobi."}
            ]
        }"#;

        let segments = parse_whisper_cpp_output(json).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].end, Duration::from_millis(2340));
        assert_eq!(segments[1].start, Duration::from_millis(2340));
        assert_eq!(segments[1].text, "General Kenobi.");
    }

    #[test]
    fn test_malformed_output_is_transcription_error() {
        let result = parse_whisper_cpp_output("{\"transcription\": 3}");
        assert!(matches!(result, Err(AutosubError::Transcription(_))));
    }
}
