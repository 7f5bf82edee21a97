//! # Reporting Module
//!
//! Renders scrape results in two formats: colored console lines for the
//! interpreter step and a markdown fragment for the CI step summary.

pub mod console;
pub mod markdown;

// Re-export common reporting functions
pub use console::print_interpretation;
pub use markdown::render_summary;
