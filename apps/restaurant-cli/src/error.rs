//! CLI error types.

use thiserror::Error;

use restaurant_core::CoreError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can go wrong between the command line and the tab.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An order spec on the command line could not be parsed.
    #[error("Invalid dish spec '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    /// Bad command-line usage.
    #[error("{0}")]
    Usage(String),

    /// Failed to render JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Domain error from restaurant-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}
