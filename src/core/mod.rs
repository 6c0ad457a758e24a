//! Core extraction engine.
//!
//! ## Pipeline
//!
//! 1. **Context**: load config, list source files, load the dictionary and
//!    existing catalogs (`context`, `file_scanner`, `parsers`, `translate`)
//! 2. **Extraction**: per file, in parallel, recognize and sanitize text
//!    fragments (`extract`)
//! 3. **Catalog**: derive keys and insert candidates in sorted file order
//!    (`key`, `catalog`, `pipeline`)
//! 4. **Emit**: render the record set and optional per-locale files (`emit`)

pub mod catalog;
pub mod context;
pub mod emit;
pub mod extract;
pub mod file_scanner;
pub mod key;
pub mod parsers;
pub mod pipeline;
pub mod translate;

pub use catalog::{Candidate, Catalog, CatalogEntry, Category, InsertOutcome};
pub use context::ExtractContext;
pub use pipeline::{BuildResult, FileStat};
pub use translate::{Dictionary, Translation, TranslationKind, Translator};
