//! Harvest - hard-coded UI text extractor
//!
//! Harvest is a CLI tool and library that scans UI source files for
//! hard-coded, user-facing text (accented source-language strings), derives a
//! stable key for each, attaches a draft translation and writes a
//! deduplicated localization catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console report)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (recognizers, keys, translation, catalog)
//! - `issues`: Skipped-file diagnostics
//! - `json_writer`: JSON output files
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod json_writer;
pub mod utils;
