//! Common utility functions shared across the codebase.

/// Accented characters of the source language, lower and upper case.
///
/// Presence of one of these is the only signal used to tell natural-language
/// text apart from code and identifiers.
pub const ACCENTED_CHARS: &str = "àâäçèéêëîïôöùûüœæÀÂÄÇÈÉÊËÎÏÔÖÙÛÜŒÆ";

/// Checks if the character belongs to the accented set.
pub fn is_accented(c: char) -> bool {
    ACCENTED_CHARS.contains(c)
}

/// Checks if the text contains at least one accented source-language character.
///
/// # Examples
///
/// ```
/// use harvest::utils::contains_accented;
///
/// assert!(contains_accented("Événements"));
/// assert!(contains_accented("Mettre à jour"));
/// assert!(!contains_accented("Submit Form"));
/// assert!(!contains_accented(""));
/// ```
pub fn contains_accented(text: &str) -> bool {
    text.chars().any(is_accented)
}

/// Folds a lower-case accented character to its unaccented spelling.
///
/// Returns `None` for characters outside the accented set.
pub fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'â' | 'ä' => "a",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'î' | 'ï' => "i",
        'ô' | 'ö' => "o",
        'ù' | 'û' | 'ü' => "u",
        'œ' => "oe",
        'æ' => "ae",
        _ => return None,
    };
    Some(folded)
}
