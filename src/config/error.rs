//! Configuration loading errors.

use thiserror::Error;

/// Errors raised while loading or validating a [`NavConfig`](super::NavConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config YAML: {0}")]
    Parse(String),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
