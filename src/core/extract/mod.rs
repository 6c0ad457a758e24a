//! Per-file text extraction.
//!
//! ## Module Structure
//!
//! - `recognizer`: Pattern Matcher (four accent-gated recognizers)
//! - `sanitizer`: Text Sanitizer (canonical form and rejection rules)

pub mod recognizer;
pub mod sanitizer;

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;

pub use recognizer::{Fragment, PatternMatcher, Recognizer, RecognizerKind, Scan};
pub use sanitizer::{Sanitizer, collapse_whitespace};

/// Pattern Matcher followed by the Text Sanitizer, for one file at a time.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    matcher: PatternMatcher,
    sanitizer: Sanitizer,
}

/// Canonical texts found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTexts {
    /// Unique canonical texts, in order of first discovery.
    pub texts: Vec<String>,
    /// Raw fragments reported by each recognizer, before filtering.
    pub fragments: BTreeMap<RecognizerKind, usize>,
}

impl FileTexts {
    pub fn fragment_count(&self) -> usize {
        self.fragments.values().sum()
    }
}

impl TextExtractor {
    pub fn new(checked_attributes: &[String], reserved_prefixes: &[String]) -> Result<Self> {
        Ok(Self {
            matcher: PatternMatcher::new(checked_attributes)?,
            sanitizer: Sanitizer::new(reserved_prefixes),
        })
    }

    /// Extract unique canonical texts from a file's content.
    ///
    /// Discovery order (recognizer order, then position) is kept so that
    /// collisions inside a file resolve the same way on every run.
    pub fn extract(&self, content: &str) -> FileTexts {
        let mut seen = HashSet::new();
        let mut result = FileTexts::default();

        for fragment in self.matcher.scan(content) {
            *result.fragments.entry(fragment.recognizer).or_default() += 1;
            let Some(text) = self.sanitizer.sanitize(fragment.text) else {
                continue;
            };
            if seen.insert(text.clone()) {
                result.texts.push(text);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> TextExtractor {
        TextExtractor::new(
            &["placeholder".to_string(), "title".to_string(), "alt".to_string()],
            &["pages.".to_string(), "common.".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_extract_dedups_within_file() {
        let source = r#"
            <button>Réserver</button>
            <h2 title="Réserver">Réserver</h2>
        "#;
        let found = extractor().extract(source);

        assert_eq!(found.texts, vec!["Réserver"]);
        assert_eq!(found.fragment_count(), 5);
        assert_eq!(
            found.fragments,
            BTreeMap::from([
                (RecognizerKind::QuotedLiteral, 1),
                (RecognizerKind::TagBody, 2),
                (RecognizerKind::AttributeValue, 1),
                (RecognizerKind::LabelButtonBody, 1),
            ])
        );
    }

    #[test]
    fn test_extract_sanitizes_fragments() {
        let source = "<p>\n   Découvrez   nos\n exposants\n</p>\n<p>Où</p>";
        let found = extractor().extract(source);

        assert_eq!(found.texts, vec!["Découvrez nos exposants"]);
    }

    #[test]
    fn test_extract_empty_file() {
        assert_eq!(extractor().extract(""), FileTexts::default());
    }
}
