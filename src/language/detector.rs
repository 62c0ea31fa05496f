use tracing::debug;
use whatlang::Lang;

use super::mapper::name_for;

/// Returned when the detector cannot classify the text.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Detect the language of `text` and return its display name.
///
/// Empty input and text without enough signal come back as "Unknown".
/// Results for very short strings are best-effort.
pub fn detect(text: &str) -> String {
    match whatlang::detect(text) {
        Some(info) => {
            let code = iso_639_1(info.lang());
            debug!(
                "Detected language code {} (confidence {:.2}, reliable: {})",
                code,
                info.confidence(),
                info.is_reliable()
            );
            name_for(code)
        }
        None => {
            debug!("Language detection failed for {} chars of input", text.len());
            UNKNOWN_LANGUAGE.to_string()
        }
    }
}

/// whatlang reports ISO 639-3; the name table is keyed by 639-1.
fn iso_639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Afr => "af",
        Lang::Aka => "ak",
        Lang::Amh => "am",
        Lang::Ara => "ar",
        Lang::Aze => "az",
        Lang::Bel => "be",
        Lang::Ben => "bn",
        Lang::Bul => "bg",
        Lang::Cat => "ca",
        Lang::Ces => "cs",
        Lang::Cmn => "zh",
        Lang::Dan => "da",
        Lang::Deu => "de",
        Lang::Ell => "el",
        Lang::Eng => "en",
        Lang::Epo => "eo",
        Lang::Est => "et",
        Lang::Fin => "fi",
        Lang::Fra => "fr",
        Lang::Guj => "gu",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Hrv => "hr",
        Lang::Hun => "hu",
        Lang::Hye => "hy",
        Lang::Ind => "id",
        Lang::Ita => "it",
        Lang::Jav => "jv",
        Lang::Jpn => "ja",
        Lang::Kan => "kn",
        Lang::Kat => "ka",
        Lang::Khm => "km",
        Lang::Kor => "ko",
        Lang::Lat => "la",
        Lang::Lav => "lv",
        Lang::Lit => "lt",
        Lang::Mal => "ml",
        Lang::Mar => "mr",
        Lang::Mkd => "mk",
        Lang::Mya => "my",
        Lang::Nep => "ne",
        Lang::Nld => "nl",
        Lang::Nob => "nb",
        Lang::Ori => "or",
        Lang::Pan => "pa",
        Lang::Pes => "fa",
        Lang::Pol => "pl",
        Lang::Por => "pt",
        Lang::Ron => "ro",
        Lang::Rus => "ru",
        Lang::Sin => "si",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Sna => "sn",
        Lang::Spa => "es",
        Lang::Srp => "sr",
        Lang::Swe => "sv",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Tgl => "tl",
        Lang::Tha => "th",
        Lang::Tuk => "tk",
        Lang::Tur => "tr",
        Lang::Ukr => "uk",
        Lang::Urd => "ur",
        Lang::Uzb => "uz",
        Lang::Vie => "vi",
        Lang::Yid => "yi",
        Lang::Zul => "zu",
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::mapper::is_known_code;

    #[test]
    fn test_empty_text_is_unknown() {
        assert_eq!(detect(""), UNKNOWN_LANGUAGE);
    }

    #[test]
    fn test_punctuation_only_is_unknown() {
        assert_eq!(detect("?!... 123"), UNKNOWN_LANGUAGE);
    }

    #[test]
    fn test_longer_sentences() {
        assert_eq!(
            detect("This is a longer English sentence to ensure correct detection."),
            "English"
        );
        assert_eq!(
            detect(
                "El rápido zorro marrón salta sobre el perro perezoso en el jardín de mi casa."
            ),
            "Spanish"
        );
        assert_eq!(
            detect(
                "Сегодня утром мы пошли в большой магазин, чтобы купить свежий хлеб, \
                 молоко и овощи для ужина, а потом долго гуляли по парку."
            ),
            "Russian"
        );
    }

    #[test]
    fn test_tagalog_and_armenian_use_table_names() {
        assert_eq!(
            detect("Magandang umaga sa inyong lahat, kumusta kayo ngayong araw na ito?"),
            "Filipino"
        );
        assert_eq!(detect("Բարի լույս բոլորին, ինչպես եք այսօր"), "Armenian");
    }

    #[test]
    fn test_every_detector_language_has_a_table_name() {
        let unresolved: Vec<_> = Lang::all()
            .iter()
            .map(|lang| (*lang, iso_639_1(*lang)))
            .filter(|(_, code)| !is_known_code(code))
            .collect();
        assert!(unresolved.is_empty(), "codes missing from the name table: {:?}", unresolved);
    }

    #[test]
    fn test_codes_resolve_through_name_table() {
        assert_eq!(name_for(iso_639_1(Lang::Cmn)), "Chinese");
        assert_eq!(name_for(iso_639_1(Lang::Nob)), "Norwegian");
        assert_eq!(name_for(iso_639_1(Lang::Pes)), "Persian");
    }
}
