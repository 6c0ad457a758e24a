use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".harvestrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_checked_attributes")]
    pub checked_attributes: Vec<String>,
    #[serde(default = "default_reserved_prefixes")]
    pub reserved_prefixes: Vec<String>,
    #[serde(default)]
    pub existing_catalogs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales_dir: Option<String>,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_target_locale")]
    pub target_locale: String,
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

fn default_source_root() -> String {
    "./src/pages".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["tsx".to_string()]
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_checked_attributes() -> Vec<String> {
    ["placeholder", "title", "alt"].map(String::from).to_vec()
}

fn default_reserved_prefixes() -> Vec<String> {
    ["pages.", "common."].map(String::from).to_vec()
}

fn default_output() -> String {
    "I18N_EXTRACTED_KEYS.json".to_string()
}

fn default_source_locale() -> String {
    "fr".to_string()
}

fn default_target_locale() -> String {
    "en".to_string()
}

fn default_preview_limit() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            extensions: default_extensions(),
            includes: Vec::new(),
            ignores: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            checked_attributes: default_checked_attributes(),
            reserved_prefixes: default_reserved_prefixes(),
            existing_catalogs: Vec::new(),
            dictionary: None,
            output: default_output(),
            locales_dir: None,
            source_locale: default_source_locale(),
            target_locale: default_target_locale(),
            preview_limit: default_preview_limit(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid, if no file extension is
    /// configured, if an attribute name is not a plain identifier, or if the
    /// source and target locales are the same.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file suffix");
        }

        for attr in &self.checked_attributes {
            let valid = !attr.is_empty()
                && attr
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if !valid {
                bail!("Invalid attribute name in 'checkedAttributes': \"{}\"", attr);
            }
        }

        if self.source_locale == self.target_locale {
            bail!(
                "'sourceLocale' and 'targetLocale' must differ (both are \"{}\")",
                self.source_locale
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
