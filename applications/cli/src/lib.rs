//! Kara CLI Library
//!
//! Command-line front end for `kara-pattern`: validate format
//! specifications, print their regex projection, and resolve song paths
//! into metadata.
//!
//! This library exposes the command and rendering layers for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

// Re-export commonly used types for convenience
pub use commands::{CheckOutcome, ParseOutcome};
pub use config::CliConfig;
pub use error::{CliError, Result};
