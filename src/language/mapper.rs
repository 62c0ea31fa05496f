use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Two-letter detector codes and their display names.
///
/// Each code appears once; `it` and `sw` used to be listed twice with the
/// same name.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"), ("es", "Spanish"), ("fr", "French"), ("de", "German"),
    ("it", "Italian"), ("pt", "Portuguese"), ("ru", "Russian"), ("ja", "Japanese"),
    ("ko", "Korean"), ("zh", "Chinese"), ("ar", "Arabic"), ("hi", "Hindi"),
    ("bn", "Bengali"), ("ur", "Urdu"), ("tr", "Turkish"), ("nl", "Dutch"),
    ("sv", "Swedish"), ("da", "Danish"), ("no", "Norwegian"), ("fi", "Finnish"),
    ("pl", "Polish"), ("cs", "Czech"), ("sk", "Slovak"), ("hu", "Hungarian"),
    ("ro", "Romanian"), ("bg", "Bulgarian"), ("hr", "Croatian"), ("sr", "Serbian"),
    ("sl", "Slovenian"), ("et", "Estonian"), ("lv", "Latvian"), ("lt", "Lithuanian"),
    ("mt", "Maltese"), ("el", "Greek"), ("he", "Hebrew"), ("th", "Thai"),
    ("vi", "Vietnamese"), ("id", "Indonesian"), ("ms", "Malay"), ("tl", "Filipino"),
    ("sw", "Swahili"), ("af", "Afrikaans"), ("is", "Icelandic"), ("ga", "Irish"),
    ("cy", "Welsh"), ("eu", "Basque"), ("ca", "Catalan"), ("gl", "Galician"),
    ("fy", "Frisian"), ("lb", "Luxembourgish"), ("sq", "Albanian"), ("mk", "Macedonian"),
    ("bs", "Bosnian"), ("me", "Montenegrin"), ("ky", "Kyrgyz"), ("kk", "Kazakh"),
    ("uz", "Uzbek"), ("tk", "Turkmen"), ("tg", "Tajik"), ("mn", "Mongolian"),
    ("ka", "Georgian"), ("hy", "Armenian"), ("az", "Azerbaijani"), ("ku", "Kurdish"),
    ("fa", "Persian"), ("ps", "Pashto"), ("sd", "Sindhi"), ("ne", "Nepali"),
    ("si", "Sinhala"), ("my", "Burmese"), ("km", "Khmer"), ("lo", "Lao"),
    ("am", "Amharic"), ("ti", "Tigrinya"), ("so", "Somali"), ("ha", "Hausa"),
    ("yo", "Yoruba"), ("ig", "Igbo"), ("zu", "Zulu"), ("xh", "Xhosa"),
    ("st", "Southern Sotho"), ("tn", "Tswana"), ("ss", "Swati"), ("ve", "Venda"),
    ("ts", "Tsonga"), ("nr", "Southern Ndebele"), ("sn", "Shona"), ("rw", "Kinyarwanda"),
    ("lg", "Ganda"), ("ak", "Akan"), ("tw", "Twi"), ("ee", "Ewe"),
    ("ff", "Fula"), ("wo", "Wolof"), ("dy", "Dyula"), ("bm", "Bambara"),
    ("sg", "Sango"), ("ln", "Lingala"), ("mg", "Malagasy"), ("co", "Corsican"),
    ("oc", "Occitan"), ("an", "Aragonese"), ("ast", "Asturian"), ("ext", "Extremaduran"),
    ("lad", "Ladino"), ("sc", "Sardinian"), ("fur", "Friulian"), ("lld", "Ladin"),
    ("rm", "Romansh"), ("vec", "Venetian"), ("lmo", "Lombard"), ("pms", "Piedmontese"),
    ("eml", "Emilian-Romagnol"), ("lij", "Ligurian"), ("nap", "Neapolitan"), ("scn", "Sicilian"),
    ("cal", "Calabrian"), ("srd", "Sardinian"),
    // Codes the detector emits that have no entry above
    ("nb", "Norwegian"), ("uk", "Ukrainian"), ("be", "Belarusian"), ("eo", "Esperanto"),
    ("la", "Latin"), ("yi", "Yiddish"), ("jv", "Javanese"), ("mr", "Marathi"),
    ("kn", "Kannada"), ("ta", "Tamil"), ("te", "Telugu"), ("gu", "Gujarati"),
    ("pa", "Punjabi"), ("ml", "Malayalam"), ("or", "Odia"),
];

static LANGUAGE_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LANGUAGE_NAMES.iter().copied().collect());

/// Languages advertised by `/supported-languages`, in display order.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "English", "Spanish", "French", "German", "Italian", "Portuguese",
    "Russian", "Japanese", "Korean", "Chinese", "Arabic", "Hindi",
    "Bengali", "Urdu", "Turkish", "Dutch", "Swedish", "Danish",
    "Norwegian", "Finnish", "Polish", "Czech", "Slovak", "Hungarian",
    "Romanian", "Bulgarian", "Croatian", "Serbian", "Slovenian", "Estonian",
    "Latvian", "Lithuanian", "Maltese", "Greek", "Hebrew", "Thai",
    "Vietnamese", "Indonesian", "Malay", "Filipino", "Swahili", "Afrikaans",
    "Icelandic", "Irish", "Welsh", "Basque", "Catalan", "Galician",
    "Frisian", "Luxembourgish", "Albanian", "Macedonian", "Bosnian", "Montenegrin",
    "Kyrgyz", "Kazakh", "Uzbek", "Turkmen", "Tajik", "Mongolian",
    "Georgian", "Armenian", "Azerbaijani", "Kurdish", "Persian", "Pashto",
    "Sindhi", "Nepali", "Sinhala", "Burmese", "Khmer", "Lao",
    "Amharic", "Tigrinya", "Somali", "Hausa", "Yoruba", "Igbo",
    "Zulu", "Xhosa", "Southern Sotho", "Tswana", "Swati", "Venda",
    "Tsonga", "Southern Ndebele", "Shona", "Kinyarwanda", "Ganda", "Akan",
    "Twi", "Ewe", "Fula", "Wolof", "Dyula", "Bambara",
    "Sango", "Lingala", "Malagasy", "Corsican", "Occitan", "Aragonese",
    "Asturian", "Extremaduran", "Ladino", "Sardinian", "Friulian", "Ladin",
    "Romansh", "Venetian", "Lombard", "Piedmontese", "Emilian-Romagnol", "Ligurian",
    "Neapolitan", "Sicilian", "Calabrian",
];

/// Display name for a detector code, or the code title-cased when unknown.
pub fn name_for(code: &str) -> String {
    match LANGUAGE_MAP.get(code) {
        Some(name) => name.to_string(),
        None => title_case(code),
    }
}

/// Whether `code` has an entry in the name table.
pub fn is_known_code(code: &str) -> bool {
    LANGUAGE_MAP.contains_key(code)
}

/// Upper-case the first letter of every word and lower-case the rest.
/// Any non-alphabetic character starts a new word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
