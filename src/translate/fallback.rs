use super::types::TranslationResponse;

pub const FALLBACK_MATCH_CONFIDENCE: f32 = 0.3;
pub const FALLBACK_MISS_CONFIDENCE: f32 = 0.1;

/// Known phrases with their translations, scanned in order.
const FALLBACK_PHRASES: &[(&str, &[(&str, &str)])] = &[
    (
        "hello",
        &[
            ("Spanish", "hola"),
            ("French", "bonjour"),
            ("German", "hallo"),
            ("Italian", "ciao"),
            ("Portuguese", "olá"),
            ("Russian", "привет"),
            ("Japanese", "こんにちは"),
            ("Korean", "안녕하세요"),
            ("Chinese", "你好"),
            ("Arabic", "مرحبا"),
            ("Hindi", "नमस्ते"),
        ],
    ),
    (
        "thank you",
        &[
            ("Spanish", "gracias"),
            ("French", "merci"),
            ("German", "danke"),
            ("Italian", "grazie"),
            ("Portuguese", "obrigado"),
            ("Russian", "спасибо"),
            ("Japanese", "ありがとう"),
            ("Korean", "감사합니다"),
            ("Chinese", "谢谢"),
            ("Arabic", "شكرا"),
            ("Hindi", "धन्यवाद"),
        ],
    ),
    (
        "goodbye",
        &[
            ("Spanish", "adiós"),
            ("French", "au revoir"),
            ("German", "auf wiedersehen"),
            ("Italian", "arrivederci"),
            ("Portuguese", "adeus"),
            ("Russian", "до свидания"),
            ("Japanese", "さようなら"),
            ("Korean", "안녕히 가세요"),
            ("Chinese", "再见"),
            ("Arabic", "مع السلامة"),
            ("Hindi", "अलविदा"),
        ],
    ),
];

/// Last-resort response used when the backend could not translate.
///
/// The first table phrase that is contained in the lower-cased input and has
/// a `target_lang` entry wins; there is no longest-match preference.
pub fn fallback(text: &str, detected_lang: &str, target_lang: &str) -> TranslationResponse {
    let normalized = text.trim().to_lowercase();

    let matched = FALLBACK_PHRASES
        .iter()
        .filter(|(phrase, _)| normalized.contains(phrase))
        .find_map(|(phrase, translations)| {
            translations
                .iter()
                .find(|(lang, _)| *lang == target_lang)
                .map(|(_, translation)| (*phrase, *translation))
        });

    let (translated_text, confidence, message) = match matched {
        Some((phrase, translation)) => (
            translation.to_string(),
            FALLBACK_MATCH_CONFIDENCE,
            format!("Fallback translation used for '{}'", phrase),
        ),
        None => (
            text.to_string(),
            FALLBACK_MISS_CONFIDENCE,
            "No fallback translation available. Please ensure the translation backend is reachable."
                .to_string(),
        ),
    };

    TranslationResponse {
        original_text: text.to_string(),
        translated_text,
        detected_language: detected_lang.to_string(),
        source_language: detected_lang.to_string(),
        target_language: target_lang.to_string(),
        confidence: Some(confidence),
        fallback_used: true,
        message,
    }
}
