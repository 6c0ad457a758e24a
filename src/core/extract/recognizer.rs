//! Recognizers for user-facing text in UI source files.
//!
//! Every recognizer is gated on the accent signal: a match must contain at
//! least one character from [`ACCENTED_CHARS`]. Pure ASCII text is never
//! reported, whatever its quoting.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use enum_dispatch::enum_dispatch;
use regex::Regex;

use crate::utils::ACCENTED_CHARS;

/// Character class matching one accented character.
fn accent_class() -> String {
    format!("[{}]", ACCENTED_CHARS)
}

// Quoted literals. Double and single quoted text stays on one line and never
// contains markup brackets; single quoted text also excludes `"` so that
// apostrophes inside double-quoted prose do not open a new literal.
static QUOTED_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let a = accent_class();
    Regex::new(&format!(
        r#""([^"<>\n]*{a}[^"<>\n]*)"|'([^'"<>\n]*{a}[^'"<>\n]*)'|`([^`]*{a}[^`]*)`"#
    ))
    .unwrap()
});

// Text between a `>` and the next closing tag, without nested markup or
// expression braces.
static TAG_BODY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let a = accent_class();
    Regex::new(&format!(r#">([^<>{{}}]*{a}[^<>{{}}]*)</"#)).unwrap()
});

static LABEL_BUTTON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let a = accent_class();
    Regex::new(&format!(
        r#"<(?:label|button|Button)\b[^>]*>([^<]*{a}[^<]*)</(?:label|button|Button)\s*>"#
    ))
    .unwrap()
});

/// Which recognizer produced a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecognizerKind {
    QuotedLiteral,
    TagBody,
    AttributeValue,
    LabelButtonBody,
}

impl std::fmt::Display for RecognizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognizerKind::QuotedLiteral => write!(f, "quoted-literal"),
            RecognizerKind::TagBody => write!(f, "tag-body"),
            RecognizerKind::AttributeValue => write!(f, "attribute-value"),
            RecognizerKind::LabelButtonBody => write!(f, "label-button-body"),
        }
    }
}

/// A raw text fragment found in a source file, before sanitizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'t> {
    pub text: &'t str,
    pub recognizer: RecognizerKind,
}

/// Capability shared by all recognizers.
#[enum_dispatch]
pub trait Scan {
    /// Return every fragment of `text` this recognizer accepts, in source order.
    fn scan<'t>(&self, text: &'t str) -> Vec<Fragment<'t>>;
}

/// Collect the first participating capture group of every match.
fn captures<'t>(regex: &Regex, text: &'t str, recognizer: RecognizerKind) -> Vec<Fragment<'t>> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.iter().skip(1).flatten().next())
        .map(|m| Fragment {
            text: m.as_str(),
            recognizer,
        })
        .collect()
}

/// Text enclosed in `"…"`, `'…'` or `` `…` ``.
#[derive(Debug, Clone, Default)]
pub struct QuotedLiteral;

impl Scan for QuotedLiteral {
    fn scan<'t>(&self, text: &'t str) -> Vec<Fragment<'t>> {
        captures(&QUOTED_LITERAL_REGEX, text, RecognizerKind::QuotedLiteral)
    }
}

/// Text between an opening and a closing markup boundary.
#[derive(Debug, Clone, Default)]
pub struct TagBody;

impl Scan for TagBody {
    fn scan<'t>(&self, text: &'t str) -> Vec<Fragment<'t>> {
        captures(&TAG_BODY_REGEX, text, RecognizerKind::TagBody)
    }
}

/// Values of attributes that conventionally carry visible text.
#[derive(Debug, Clone)]
pub struct AttributeValue {
    /// `None` when no attribute names are configured.
    regex: Option<Regex>,
}

impl AttributeValue {
    pub fn new(attributes: &[String]) -> Result<Self> {
        if attributes.is_empty() {
            return Ok(Self { regex: None });
        }

        let names = attributes
            .iter()
            .map(|attr| regex::escape(attr))
            .collect::<Vec<_>>()
            .join("|");
        let a = accent_class();
        let pattern = format!(
            r#"\b(?:{names})\s*=\s*(?:"([^"]*{a}[^"]*)"|'([^']*{a}[^']*)')"#
        );
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Failed to build attribute pattern for {:?}", attributes))?;
        Ok(Self { regex: Some(regex) })
    }
}

impl Scan for AttributeValue {
    fn scan<'t>(&self, text: &'t str) -> Vec<Fragment<'t>> {
        match &self.regex {
            Some(regex) => captures(regex, text, RecognizerKind::AttributeValue),
            None => Vec::new(),
        }
    }
}

/// Body of `<label>` and `<button>`/`<Button>` elements.
#[derive(Debug, Clone, Default)]
pub struct LabelButtonBody;

impl Scan for LabelButtonBody {
    fn scan<'t>(&self, text: &'t str) -> Vec<Fragment<'t>> {
        captures(&LABEL_BUTTON_REGEX, text, RecognizerKind::LabelButtonBody)
    }
}

/// The fixed family of recognizers.
#[enum_dispatch(Scan)]
#[derive(Debug, Clone)]
pub enum Recognizer {
    QuotedLiteral(QuotedLiteral),
    TagBody(TagBody),
    AttributeValue(AttributeValue),
    LabelButtonBody(LabelButtonBody),
}

/// Runs every recognizer over a file and unions their fragments.
///
/// A fragment found by two recognizers is reported twice; deduplication
/// happens when candidates enter the catalog.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    recognizers: Vec<Recognizer>,
}

impl PatternMatcher {
    pub fn new(checked_attributes: &[String]) -> Result<Self> {
        Ok(Self {
            recognizers: vec![
                QuotedLiteral.into(),
                TagBody.into(),
                AttributeValue::new(checked_attributes)?.into(),
                LabelButtonBody.into(),
            ],
        })
    }

    /// Lazily yield fragments, one recognizer at a time.
    pub fn scan<'a, 't>(&'a self, text: &'t str) -> impl Iterator<Item = Fragment<'t>> + 'a
    where
        't: 'a,
    {
        self.recognizers
            .iter()
            .flat_map(move |recognizer| recognizer.scan(text))
    }
}
