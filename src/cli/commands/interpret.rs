//! # Interpret Command Module
//!
//! Implements `remates-report interpret`: prints the scrape statistics and
//! fails the step unless the scraper reported success.

use anyhow::{bail, Result};
use std::path::Path;

use crate::core::context::RunContext;
use crate::core::interpreter::interpret_file;
use crate::infra::t;
use crate::reporting::console::print_interpretation;

/// Executes the interpret command.
///
/// # Arguments
/// * `file` - Path to the scraper's JSON result
/// * `context` - Informational run inputs, printed first when present
/// * `locale` - Language for messages
///
/// # Returns
/// `Ok(())` only for a present, parseable document with status `success`.
/// Every other case has already been printed in the run's language, so the
/// returned error only carries the localized verdict.
pub fn execute(file: &Path, context: &RunContext, locale: &str) -> Result<()> {
    let interpretation = interpret_file(file, context, locale);
    print_interpretation(&interpretation);

    if !interpretation.is_success() {
        bail!(t!("interpret.run_failed", locale = locale).to_string());
    }
    Ok(())
}
