use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::DEFAULT_LOCALE;
use crate::infra::t;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "remates-report.toml";

/// Result file read when neither the command line nor the config names one.
pub const DEFAULT_RESULT_FILE: &str = "remates_result.json";

/// Optional settings for the reporter, loaded from a TOML file.
/// CLI flags take precedence over every value here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// The language for output messages (e.g., "es", "en", "auto").
    /// Defaults to "es" if not specified.
    #[serde(default = "default_language")]
    pub language: String,

    /// Path of the scraper's JSON result. May contain `~` and `$VAR`.
    #[serde(default = "default_result_file")]
    pub result_file: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            result_file: default_result_file(),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_result_file() -> PathBuf {
    PathBuf::from(DEFAULT_RESULT_FILE)
}

/// Parses a configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ReportConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Reads and parses the configuration file at `path`.
pub fn load_config(path: &Path, locale: &str) -> Result<ReportConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("config.read_failed", locale = locale, path = path.display()).to_string())?;
    parse_config(&content)
        .with_context(|| t!("config.parse_failed", locale = locale, path = path.display()).to_string())
}

/// Loads the configuration the CLI should use.
///
/// An explicit path must load. Without one, [`DEFAULT_CONFIG_FILE`] is used
/// when present in the working directory, and built-in defaults otherwise.
pub fn resolve_config(explicit: Option<&Path>, locale: &str) -> Result<ReportConfig> {
    match explicit {
        Some(path) => load_config(path, locale),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                load_config(default_path, locale)
            } else {
                Ok(ReportConfig::default())
            }
        }
    }
}
