//! # Remates Report Library
//!
//! Reporting utility for the auction ("remates") scraper CI job. The scraper
//! writes a single JSON artifact; this library turns it into console
//! statistics with a pass/fail verdict and into a markdown step summary.
//!
//! ## Modules
//!
//! - `core` - Result document model, error taxonomy, configuration and the interpreter
//! - `infra` - File system helpers and i18n re-exports
//! - `reporting` - Console and markdown renderers
//! - `cli` - Command-line interface and commands

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::error::ReportError;
pub use crate::core::interpreter::{interpret, interpret_file};
pub use crate::reporting::markdown::render_summary;

/// Locale used when nothing else is requested, and the fallback for
/// unknown locales.
pub const DEFAULT_LOCALE: &str = "es";

/// Resolves the locale to use for messages.
///
/// `None` yields [`DEFAULT_LOCALE`]. `"auto"` detects the system locale.
/// The full tag is tried first (e.g. "es-CL"), then the language part
/// ("es"), and finally the default.
pub fn resolve_locale(requested: Option<&str>) -> String {
    let requested = match requested {
        Some(lang) if lang.eq_ignore_ascii_case("auto") => {
            sys_locale::get_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
        }
        Some(lang) if !lang.trim().is_empty() => lang.trim().to_string(),
        _ => return DEFAULT_LOCALE.to_string(),
    };

    let available_locales = rust_i18n::available_locales!();
    if available_locales.contains(&requested.as_str()) {
        return requested;
    }

    requested
        .split(['-', '_'])
        .next()
        .map(str::to_ascii_lowercase)
        .filter(|lang_code| available_locales.contains(&lang_code.as_str()))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "es");
