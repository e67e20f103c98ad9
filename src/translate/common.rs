use std::time::Duration;
use reqwest::{Client, Response};

use crate::config::TranslateConfig;
use crate::error::{AutosubError, Result};

/// HTTP client shared by the translation backends
pub fn build_client(config: &TranslateConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("autosubber/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Join endpoint and path without doubling the separator
pub fn endpoint_url(endpoint: &str, path: &str) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Turn a non-success status into a translation error carrying the body
pub async fn ensure_success(response: Response, service: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    Err(AutosubError::Translation(format!(
        "{} API error {}: {}", service, status, error_text
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(endpoint_url("http://localhost:11434", "/api/generate"), "http://localhost:11434/api/generate");
        assert_eq!(endpoint_url("http://localhost:5000/", "translate"), "http://localhost:5000/translate");
    }
}
