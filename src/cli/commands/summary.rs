//! # Summary Command Module
//!
//! Implements `remates-report summary`: appends the markdown fragment to the
//! step summary. This step runs even after the scraper or the interpreter
//! failed, so it reports its own problems as warnings and always succeeds.

use anyhow::Result;
use std::path::Path;

use crate::core::context::RunContext;
use crate::infra::fs::append_to_sink;
use crate::infra::t;
use crate::reporting::console::print_warning;
use crate::reporting::markdown::render_summary;

/// Executes the summary command.
///
/// # Arguments
/// * `file` - Path to the scraper's JSON result
/// * `sink` - Step-summary file to append to; stdout when `None`
/// * `context` - Informational run inputs
/// * `locale` - Language for messages
pub fn execute(file: &Path, sink: Option<&Path>, context: &RunContext, locale: &str) -> Result<()> {
    let fragment = render_summary(file, context, locale);

    match sink {
        Some(sink_path) => {
            if let Err(e) = append_to_sink(sink_path, &fragment) {
                print_warning(&t!(
                    "summary.sink_failed",
                    locale = locale,
                    path = sink_path.display(),
                    error = format!("{:#}", e)
                ));
                println!("{}", fragment);
            }
        }
        None => println!("{}", fragment),
    }

    Ok(())
}
