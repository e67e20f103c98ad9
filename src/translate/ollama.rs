use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TranslateConfig;
use crate::error::{AutosubError, Result};
use crate::language::language_name;
use super::{Translator, common::{build_client, endpoint_url, ensure_success}};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
}

/// Translator backed by an Ollama model
pub struct OllamaTranslator {
    client: Client,
    config: TranslateConfig,
}

impl OllamaTranslator {
    pub fn new(config: TranslateConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Translator for OllamaTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: build_translation_prompt(text, source_language, target_language),
            stream: false,
            format: "json".to_string(),
        };

        let url = endpoint_url(&self.config.endpoint, "/api/generate");
        debug!("Sending translation request to: {}", url);

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AutosubError::Translation(format!("HTTP request failed: {}", e)))?;

        let response = ensure_success(response, "Ollama").await?;
        let generated: GenerateResponse = response.json().await
            .map_err(|e| AutosubError::Translation(format!("Failed to parse response: {}", e)))?;

        debug!("Raw Ollama response: {}", generated.response);
        parse_generated_text(&generated.response)
    }
}

fn build_translation_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    let source_name = language_name(source_language);
    let target_name = language_name(target_language);

    format!(
        "You are a professional subtitle translator.\n\
         \n\
         Translate the following {source_name} subtitle line to {target_name} \
         (language code: {target_language}).\n\
         Keep it concise and natural. Do not add explanations, notes, or alternatives.\n\
         Return ONLY the translation in JSON format as {{\"text\":\"your {target_name} translation here\"}}.\n\
         \n\
         [Source ({source_name})]\n\
         {text}"
    )
}

/// Extract the translation from a generated reply, accepting bare text when
/// the model ignored the JSON format
fn parse_generated_text(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AutosubError::Translation("Empty translation received".to_string()));
    }

    if let Ok(result) = serde_json::from_str::<TranslationResult>(raw) {
        return Ok(result.text.trim().to_string());
    }

    Ok(raw.trim_matches('"').trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_both_languages() {
        let prompt = build_translation_prompt("Good morning", "en", "ja");
        assert!(prompt.contains("English subtitle line to Japanese"));
        assert!(prompt.contains("language code: ja"));
        assert!(prompt.ends_with("Good morning"));
    }

    #[test]
    fn test_generate_response_body() {
        let body = r#"{"model":"llama3.2:3b","created_at":"2024-01-01T00:00:00Z","response":"{\"text\":\"Hallo\"}","done":true}"#;
        let generated: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parse_generated_text(&generated.response).unwrap(), "Hallo");
    }

    #[test]
    fn test_parse_json_reply() {
        assert_eq!(parse_generated_text(" {\"text\": \" おはよう \"} ").unwrap(), "おはよう");
    }

    #[test]
    fn test_parse_bare_reply() {
        assert_eq!(parse_generated_text("\"Bonjour\"\n").unwrap(), "Bonjour");
    }

    #[test]
    fn test_empty_reply_is_error() {
        assert!(matches!(parse_generated_text("  \n"), Err(AutosubError::Translation(_))));
    }
}
