//! Tapedeck command-line tools
//!
//! Inspect embedded tags, print lyric timelines and run batch imports from a
//! terminal.
//!
//! This library exposes the command implementations for testing purposes.

pub mod commands;
pub mod config;
pub mod error;

pub use config::CliConfig;
pub use error::{CliError, Result};
