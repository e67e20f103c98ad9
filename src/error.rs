use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutosubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Audio extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Subtitle embedding failed: {0}")]
    EmbeddingFailed(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AutosubError>;
