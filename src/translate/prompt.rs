/// Instruction sent to the backend for one translation.
pub fn build_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    format!(
        r#"You are a professional translator. Translate the following text from {source_lang} to {target_lang}.

Text to translate: "{text}"

Please provide only the translated text without any additional explanations, quotes, or formatting."#
    )
}

/// Trim the backend reply and drop one pair of wrapping double quotes.
///
/// `None` when nothing is left, which callers treat as a failed translation.
pub fn clean_response(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let unquoted = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else if trimmed == "\"" {
        ""
    } else {
        trimmed
    };

    if unquoted.is_empty() {
        None
    } else {
        Some(unquoted.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_languages_and_text() {
        let prompt = build_prompt("Hello world", "English", "Spanish");
        assert!(prompt.starts_with("You are a professional translator."));
        assert!(prompt.contains("from English to Spanish"));
        assert!(prompt.contains("Text to translate: \"Hello world\""));
        assert!(prompt.ends_with("without any additional explanations, quotes, or formatting."));
    }

    #[test]
    fn test_text_is_embedded_verbatim() {
        let text = "say \"hi\"\n{braces}";
        assert!(build_prompt(text, "English", "French").contains(text));
    }

    #[test]
    fn test_strips_one_pair_of_quotes() {
        assert_eq!(clean_response("  \"Hola mundo\"\n").as_deref(), Some("Hola mundo"));
        assert_eq!(clean_response("\"\"quoted\"\"").as_deref(), Some("\"quoted\""));
    }

    #[test]
    fn test_unbalanced_quotes_are_kept() {
        assert_eq!(clean_response("\"Hola").as_deref(), Some("\"Hola"));
        assert_eq!(clean_response("Hola\"").as_deref(), Some("Hola\""));
    }

    #[test]
    fn test_empty_results_fail() {
        assert_eq!(clean_response(""), None);
        assert_eq!(clean_response("   \n"), None);
        assert_eq!(clean_response("\"\""), None);
        assert_eq!(clean_response("\""), None);
    }

    #[test]
    fn test_inner_whitespace_survives_unquoting() {
        assert_eq!(clean_response("\" Hola \"").as_deref(), Some(" Hola "));
    }
}
