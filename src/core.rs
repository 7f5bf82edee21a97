//! # Core Module
//!
//! The scrape result document, the error taxonomy shared by both
//! components, the optional configuration file and the result interpreter.

pub mod config;
pub mod context;
pub mod error;
pub mod interpreter;
pub mod models;

// Re-exports
pub use config::ReportConfig;
pub use context::RunContext;
pub use error::ReportError;
pub use models::{ScrapeResult, ScrapeStatus};
