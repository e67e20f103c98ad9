// Speech recognition
//
// Each engine runs a Whisper command line once over the whole waveform and
// maps its JSON output to segments:
// - WhisperCpp: whisper.cpp (`whisper-cli`)
// - OpenAI: OpenAI Whisper Python (`whisper`)

pub mod common;
pub mod whisper_cpp;
pub mod openai;

use async_trait::async_trait;
use std::path::Path;

use crate::config::{TranscriberConfig, TranscriberEngine};
use crate::error::Result;
use crate::segment::Segment;

/// Main trait for transcription operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the whole audio file with timestamps, hinting the spoken language
    async fn transcribe(&self, audio_path: &Path, language: &str) -> Result<Vec<Segment>>;
}

/// Factory for creating transcriber instances
pub struct TranscriberFactory;

impl TranscriberFactory {
    pub fn create_transcriber(config: TranscriberConfig) -> Box<dyn Transcriber> {
        match config.engine {
            TranscriberEngine::WhisperCpp => {
                Box::new(whisper_cpp::WhisperCppTranscriber::new(config))
            }
            TranscriberEngine::OpenAI => {
                Box::new(openai::OpenAITranscriber::new(config))
            }
        }
    }
}
