//! # Commands Module
//!
//! One module per subcommand. Each `execute` takes already resolved inputs
//! so it can be driven from tests without going through clap.

pub mod interpret;
pub mod summary;
