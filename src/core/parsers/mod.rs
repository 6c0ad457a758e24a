//! File parsers for inputs other than UI source files.
//!
//! - `json`: existing locale catalogs, used to exclude already covered text
//!   and keys

pub mod json;
