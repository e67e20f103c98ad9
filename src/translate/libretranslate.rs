use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{AutosubError, Result};
use super::{Translator, common::{build_client, endpoint_url, ensure_success}};

#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Translator backed by a LibreTranslate-compatible server
pub struct LibreTranslateTranslator {
    client: Client,
    config: TranslateConfig,
}

impl LibreTranslateTranslator {
    pub fn new(config: TranslateConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Translator for LibreTranslateTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source: source_language,
            target: target_language,
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        let url = endpoint_url(&self.config.endpoint, "/translate");
        debug!("Sending translation request to: {}", url);

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AutosubError::Translation(format!("HTTP request failed: {}", e)))?;

        let response = ensure_success(response, "LibreTranslate").await?;
        let translated: TranslateResponse = response.json().await
            .map_err(|e| AutosubError::Translation(format!("Failed to parse response: {}", e)))?;

        Ok(translated.translated_text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let request = TranslateRequest {
            q: "hello",
            source: "en",
            target: "pt",
            format: "text",
            api_key: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"q": "hello", "source": "en", "target": "pt", "format": "text"}));
    }

    #[test]
    fn test_response_body() {
        let response: TranslateResponse = serde_json::from_str(r#"{"translatedText": "olá"}"#).unwrap();
        assert_eq!(response.translated_text, "olá");
    }
}
