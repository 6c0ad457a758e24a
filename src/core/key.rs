//! Key derivation from canonical text.
//!
//! `derive_key` is a pure function: the same text always yields the same key,
//! so catalogs built from overlapping file sets agree with each other.

use crate::utils::{fold_accent, is_accented};

/// Maximum length of a derived key, in characters.
pub const MAX_KEY_LEN: usize = 40;

/// Number of leading words kept in a key.
pub const KEY_WORDS: usize = 3;

/// Key used when nothing survives normalization.
pub const FALLBACK_KEY: &str = "item";

/// Derive a short, identifier-safe key from canonical text.
///
/// # Examples
///
/// ```
/// use harvest::core::key::derive_key;
///
/// assert_eq!(derive_key("Mettre à jour le profil"), "mettre_a_jour");
/// assert_eq!(derive_key("S'inscrire"), "sinscrire");
/// assert_eq!(derive_key("Rendez-vous à venir"), "rendez-vous_a_venir");
/// assert_eq!(derive_key("« ! »"), "item");
/// ```
pub fn derive_key(text: &str) -> String {
    let lowered = text.to_lowercase();

    let kept: String = lowered
        .chars()
        .filter(|&c| is_key_char(c) || c.is_whitespace())
        .collect();

    let joined = kept
        .split_whitespace()
        .take(KEY_WORDS)
        .collect::<Vec<_>>()
        .join("_");

    let folded: String = joined
        .chars()
        .map(|c| match fold_accent(c) {
            Some(ascii) => ascii.to_string(),
            None => c.to_string(),
        })
        .collect();

    let key: String = folded.chars().take(MAX_KEY_LEN).collect();
    if key.is_empty() {
        FALLBACK_KEY.to_string()
    } else {
        key
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || is_accented(c)
}
