/// CLI error types
use kara_pattern::PatternError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid format specification '{spec}': {source}")]
    Pattern {
        spec: String,
        #[source]
        source: PatternError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
