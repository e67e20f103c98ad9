use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, AutosubError};

fn default_timeout_secs() -> u64 {
    300
}

fn default_temp_audio_path() -> String {
    "temp_audio.wav".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transcriber: TranscriberConfig,
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriberConfig {
    /// Speech recognition engine
    pub engine: TranscriberEngine,
    /// Path to the engine binary (e.g., whisper-cli or whisper)
    pub binary_path: String,
    /// Model name or model file path, depending on the engine
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscriberEngine {
    /// whisper.cpp command line (`whisper-cli`)
    WhisperCpp,
    /// OpenAI Whisper Python command line (`whisper`)
    OpenAI,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Translation service backend
    pub backend: TranslationBackend,
    /// Service endpoint URL
    pub endpoint: String,
    /// Model to use (Ollama only)
    pub model: String,
    /// API key (LibreTranslate only)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationBackend {
    /// Prompted LLM served by Ollama
    Ollama,
    /// LibreTranslate-compatible machine translation server
    LibreTranslate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Path to ffmpeg binary
    pub binary_path: String,
    /// Scratch waveform written during extraction and removed after the run
    #[serde(default = "default_temp_audio_path")]
    pub temp_audio_path: String,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            engine: TranscriberEngine::WhisperCpp,
            binary_path: "whisper-cli".to_string(),
            model: "models/ggml-medium.bin".to_string(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            backend: TranslationBackend::Ollama,
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3.2:3b".to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            binary_path: "ffmpeg".to_string(),
            temp_audio_path: default_temp_audio_path(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AutosubError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| AutosubError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AutosubError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| AutosubError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[translate]\nbackend = \"LibreTranslate\"\nendpoint = \"http://localhost:5000\"\nmodel = \"\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.translate.backend, TranslationBackend::LibreTranslate);
        assert_eq!(config.translate.timeout_secs, 300);
        assert_eq!(config.transcriber.engine, TranscriberEngine::WhisperCpp);
        assert_eq!(config.media.temp_audio_path, "temp_audio.wav");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");

        let mut config = Config::default();
        config.transcriber.engine = TranscriberEngine::OpenAI;
        config.media.binary_path = "/opt/ffmpeg/bin/ffmpeg".to_string();
        config.save_to_file(&path).unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert_eq!(reloaded.transcriber.engine, TranscriberEngine::OpenAI);
        assert_eq!(reloaded.media.binary_path, "/opt/ffmpeg/bin/ffmpeg");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[media\nbinary_path = ").unwrap();

        assert!(matches!(Config::from_file(&path), Err(AutosubError::Config(_))));
    }
}
