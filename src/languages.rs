/// Short language codes the gateway recognises, with the display name that
/// goes into the prompt and back to the caller.
pub const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("pl", "Polish"),
    ("tr", "Turkish"),
    ("vi", "Vietnamese"),
    ("th", "Thai"),
    ("id", "Indonesian"),
    ("uk", "Ukrainian"),
];

/// Resolve a language code to its display name.
///
/// Lookup is exact and case-sensitive. Anything not in the table (an unknown
/// code, or a language name the caller spelled out) is returned unchanged.
pub fn display_name(target: &str) -> &str {
    LANGUAGE_NAMES
        .iter()
        .find(|(code, _)| *code == target)
        .map(|(_, name)| *name)
        .unwrap_or(target)
}
