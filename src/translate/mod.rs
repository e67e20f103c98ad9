// Machine translation
//
// Backends translate one piece of text per call. Source and target languages
// travel with every call, so a translator carries no per-run language state.
// - Ollama: prompted LLM via /api/generate
// - LibreTranslate: machine translation server via /translate

pub mod common;
pub mod ollama;
pub mod libretranslate;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::config::{TranslateConfig, TranslationBackend};
use crate::error::Result;
use crate::language::normalize_language;
use crate::segment::Segment;

/// Main trait for translation operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_language` to `target_language`
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String>;
}

/// Factory for creating translator instances
pub struct TranslatorFactory;

impl TranslatorFactory {
    pub fn create_translator(config: TranslateConfig) -> Result<Box<dyn Translator>> {
        Ok(match config.backend {
            TranslationBackend::Ollama => Box::new(ollama::OllamaTranslator::new(config)?),
            TranslationBackend::LibreTranslate => {
                Box::new(libretranslate::LibreTranslateTranslator::new(config)?)
            }
        })
    }
}

/// Translate every segment serially, keeping timestamps.
///
/// Language codes are normalized through the alias table first. The first
/// failing segment aborts the whole run.
pub async fn translate_segments(
    translator: &dyn Translator,
    segments: &[Segment],
    source_language: &str,
    target_language: &str,
) -> Result<Vec<Segment>> {
    let source = normalize_language(source_language);
    let target = normalize_language(target_language);
    info!("Translating {} segments from {} to {}", segments.len(), source, target);

    let progress = ProgressBar::new(segments.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} segments")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut translated = Vec::with_capacity(segments.len());
    for segment in segments {
        let text = if segment.text.trim().is_empty() {
            String::new()
        } else {
            translator.translate(&segment.text, &source, &target).await?
        };

        debug!("{} -> {}", segment.text, text);
        translated.push(segment.with_text(text));
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutosubError;
    use mockall::predicate::eq;
    use std::time::Duration;

    fn segments() -> Vec<Segment> {
        vec![
            Segment::new(Duration::from_secs(0), Duration::from_secs(2), "hello"),
            Segment::new(Duration::from_secs(2), Duration::from_secs(4), "world"),
        ]
    }

    #[tokio::test]
    async fn test_aliases_resolved_before_translation() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .with(eq("hello"), eq("en"), eq("pt"))
            .times(1)
            .returning(|_, _, _| Ok("olá".to_string()));
        translator
            .expect_translate()
            .with(eq("world"), eq("en"), eq("pt"))
            .times(1)
            .returning(|_, _, _| Ok("mundo".to_string()));

        let translated = translate_segments(&translator, &segments(), "en", "pt-BR").await.unwrap();
        assert_eq!(translated[0].text, "olá");
        assert_eq!(translated[1].text, "mundo");
        assert_eq!(translated[1].start, Duration::from_secs(2));
        assert_eq!(translated[1].end, Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_unmapped_codes_pass_through() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .withf(|_, source, target| source == "ja" && target == "fr")
            .times(2)
            .returning(|text, _, _| Ok(text.to_uppercase()));

        let translated = translate_segments(&translator, &segments(), "ja", "fr").await.unwrap();
        assert_eq!(translated[0].text, "HELLO");
    }

    #[tokio::test]
    async fn test_failure_aborts_run() {
        let mut translator = MockTranslator::new();
        translator
            .expect_translate()
            .times(1)
            .returning(|_, _, _| Err(AutosubError::Translation("service down".to_string())));

        let result = translate_segments(&translator, &segments(), "en", "de").await;
        assert!(matches!(result, Err(AutosubError::Translation(_))));
    }

    #[tokio::test]
    async fn test_blank_text_is_not_sent() {
        let mut translator = MockTranslator::new();
        translator.expect_translate().never();

        let blank = vec![Segment::new(Duration::ZERO, Duration::from_secs(1), "  ")];
        let translated = translate_segments(&translator, &blank, "en", "de").await.unwrap();
        assert_eq!(translated[0].text, "");
    }
}
