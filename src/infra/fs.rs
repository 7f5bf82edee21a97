//! # File System Operations Module
//!
//! Reads the scraper artifact, expands workflow-style paths and appends
//! fragments to the step-summary sink.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::core::error::ReportError;
use crate::core::models::ScrapeResult;

/// Expands `~` and `$VAR` / `${VAR}` in a path taken from the command line,
/// the config file or the environment.
///
/// Unknown variables leave the path untouched rather than failing, so a
/// literal `$` in a file name still works.
pub fn expand_path(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}

/// Loads and parses the result artifact.
///
/// # Errors
/// * `MissingArtifact` if nothing exists at `path`
/// * `MalformedArtifact` if it cannot be read as UTF-8 or parsed as a result document
pub fn load_scrape_result(path: &Path) -> Result<ScrapeResult, ReportError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ReportError::MissingArtifact {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(ReportError::MalformedArtifact {
                path: path.to_path_buf(),
                source: Box::new(e),
            });
        }
    };

    ScrapeResult::from_json(&content).map_err(|e| ReportError::MalformedArtifact {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

/// Appends `fragment` to the summary sink, creating the file if needed.
/// Existing content is never truncated.
pub fn append_to_sink(path: &Path, fragment: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open summary file: {}", path.display()))?;

    file.write_all(fragment.as_bytes())
        .with_context(|| format!("Failed to append to summary file: {}", path.display()))?;
    if !fragment.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    Ok(())
}
