//! Diagnostics produced while building a catalog.
//!
//! None of these stop a run: a file that cannot be used contributes nothing
//! and is reported as a warning.

/// Kind of input a skipped file was meant to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkippedFileType {
    /// A UI source file scanned for text.
    Source,
    /// A pre-existing locale catalog used to exclude covered text.
    Catalog,
    /// A user translation dictionary.
    Dictionary,
}

impl std::fmt::Display for SkippedFileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkippedFileType::Source => write!(f, "source"),
            SkippedFileType::Catalog => write!(f, "catalog"),
            SkippedFileType::Dictionary => write!(f, "dictionary"),
        }
    }
}

/// A file that could not be read or parsed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkippedFileIssue {
    pub file_type: SkippedFileType,
    pub file_path: String,
    pub error: String,
}

impl SkippedFileIssue {
    pub fn new(file_type: SkippedFileType, file_path: impl Into<String>, error: impl ToString) -> Self {
        Self {
            file_type,
            file_path: file_path.into(),
            error: error.to_string(),
        }
    }

    /// Build an issue from an `anyhow` error, keeping the whole context chain.
    pub fn from_error(
        file_type: SkippedFileType,
        file_path: impl Into<String>,
        error: &anyhow::Error,
    ) -> Self {
        Self::new(file_type, file_path, format!("{:#}", error))
    }
}

impl std::fmt::Display for SkippedFileIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "skipped {} file {}: {}",
            self.file_type, self.file_path, self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_display() {
        let issue = SkippedFileIssue::new(SkippedFileType::Dictionary, "dict.json", "expected value");
        assert_eq!(
            issue.to_string(),
            "skipped dictionary file dict.json: expected value"
        );
    }

    #[test]
    fn test_from_error_keeps_context_chain() {
        let err = std::fs::read_to_string("/definitely/not/here.tsx")
            .context("Failed to read source file")
            .unwrap_err();

        let issue = SkippedFileIssue::from_error(SkippedFileType::Source, "here.tsx", &err);
        assert_eq!(issue.file_path, "here.tsx");
        assert!(issue.error.starts_with("Failed to read source file: "));
    }

    #[test]
    fn test_issues_sort_by_type_then_path() {
        let mut issues = vec![
            SkippedFileIssue::new(SkippedFileType::Catalog, "b.json", "bad"),
            SkippedFileIssue::new(SkippedFileType::Source, "z.tsx", "bad"),
            SkippedFileIssue::new(SkippedFileType::Source, "a.tsx", "bad"),
        ];
        issues.sort();

        let paths: Vec<&str> = issues.iter().map(|i| i.file_path.as_str()).collect();
        assert_eq!(paths, vec!["a.tsx", "z.tsx", "b.json"]);
    }
}
