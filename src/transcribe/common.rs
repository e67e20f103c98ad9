use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AutosubError, Result};

/// Run a transcriber command to completion
pub async fn run_engine(mut cmd: Command, binary_path: &str) -> Result<()> {
    debug!("Executing transcriber command: {:?}", cmd);

    let output = cmd.output().await
        .map_err(|e| AutosubError::Transcription(format!("Failed to execute {}: {}", binary_path, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AutosubError::Transcription(format!(
            "{} exited with {}: {}",
            binary_path,
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}

/// Read and parse the JSON document an engine wrote
pub async fn read_engine_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path).await
        .map_err(|e| AutosubError::Transcription(format!(
            "Failed to read transcriber output {}: {}", path.display(), e
        )))?;

    parse_engine_json(&content)
}

pub fn parse_engine_json<T: DeserializeOwned>(content: &str) -> Result<T> {
    serde_json::from_str(content)
        .map_err(|e| AutosubError::Transcription(format!("Failed to parse transcriber output: {}", e)))
}
