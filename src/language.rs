//! Language code handling for the translation step.

/// Regional variants that translation backends only know by their base code
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("pt-br", "pt"),
    ("pt-pt", "pt"),
];

/// Resolve a language code through the alias table.
///
/// Matching is case-insensitive. Codes without an alias are returned as given.
pub fn normalize_language(code: &str) -> String {
    let lowered = code.trim().to_lowercase();
    LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, base)| base.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Human-readable language name for prompts; unknown codes are returned as is
pub fn language_name(code: &str) -> String {
    let name = match code.to_lowercase().as_str() {
        "en" => "English",
        "ja" => "Japanese",
        "ko" => "Korean",
        "zh" => "Chinese",
        "fr" => "French",
        "de" => "German",
        "es" => "Spanish",
        "ru" => "Russian",
        "it" => "Italian",
        "pt" => "Portuguese",
        "pl" => "Polish",
        "nl" => "Dutch",
        "tr" => "Turkish",
        "ar" => "Arabic",
        "hi" => "Hindi",
        "th" => "Thai",
        "vi" => "Vietnamese",
        "sv" => "Swedish",
        "da" => "Danish",
        "no" => "Norwegian",
        "fi" => "Finnish",
        "he" => "Hebrew",
        "hu" => "Hungarian",
        "cs" => "Czech",
        "el" => "Greek",
        "id" => "Indonesian",
        "ro" => "Romanian",
        "uk" => "Ukrainian",
        _ => return code.to_string(),
    };
    name.to_string()
}
