//! Error types for the headless runner.

use rugline_types::ContentError;

/// Errors that can occur before a run starts.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Settings could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The content pack failed its load-time contract check.
    #[error("content pack invalid: {0}")]
    Content(#[from] ContentError),
}
