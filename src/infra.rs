//! # Infrastructure Module
//!
//! File system helpers (artifact loading, path expansion, summary sink)
//! and i18n re-exports.

pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
