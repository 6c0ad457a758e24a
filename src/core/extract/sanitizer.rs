//! Normalization of raw fragments into canonical candidate text.

/// Shortest accepted text, in characters.
pub const MIN_TEXT_CHARS: usize = 3;

/// Longest accepted text, in characters.
pub const MAX_TEXT_CHARS: usize = 250;

/// Statement keywords that mark a fragment as code when it starts with one.
const CODE_PREFIXES: &[&str] = &["import ", "const ", "function "];

/// Turns raw fragments into canonical candidate strings.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    reserved_prefixes: Vec<String>,
}

impl Sanitizer {
    /// `reserved_prefixes` are namespaces of keys that are already localized,
    /// e.g. `pages.` or `common.`.
    pub fn new(reserved_prefixes: &[String]) -> Self {
        Self {
            reserved_prefixes: reserved_prefixes.to_vec(),
        }
    }

    /// Return the canonical form of `raw`, or `None` if it is not prose.
    ///
    /// Rules, in order:
    /// 1. trim and collapse every whitespace run to a single space;
    /// 2. reject fewer than 3 or more than 250 characters;
    /// 3. reject code-shaped text;
    /// 4. reject text that is already a key of the existing catalog.
    pub fn sanitize(&self, raw: &str) -> Option<String> {
        let text = collapse_whitespace(raw);

        let len = text.chars().count();
        if !(MIN_TEXT_CHARS..=MAX_TEXT_CHARS).contains(&len) {
            return None;
        }

        if looks_like_code(&text) {
            return None;
        }

        if self
            .reserved_prefixes
            .iter()
            .any(|prefix| text.starts_with(prefix.as_str()))
        {
            return None;
        }

        Some(text)
    }
}

/// Trim and replace each whitespace run, newlines included, with one space.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn looks_like_code(text: &str) -> bool {
    text.contains(['{', '}'])
        || text.contains("=>")
        || text.matches(';').count() >= 3
        || CODE_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
}
