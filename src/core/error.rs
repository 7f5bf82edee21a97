//! Error taxonomy shared by the interpreter and the summary renderer.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause of a malformed artifact (I/O or JSON).
pub type MalformedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The result file does not exist.
    #[error("result file not found: {}", path.display())]
    MissingArtifact { path: PathBuf },

    /// The result file exists but could not be read or parsed.
    #[error("result file {} is malformed", path.display())]
    MalformedArtifact {
        path: PathBuf,
        #[source]
        source: MalformedCause,
    },

    /// The scraper reported `error` or a status this tool does not know.
    #[error("scraper finished with status '{status}': {message}")]
    UpstreamFailure { status: String, message: String },
}
