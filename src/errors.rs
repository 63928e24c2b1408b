//! Error types for the I/O edges of the crate.
//!
//! The calculators themselves are total and never return errors: malformed
//! upstream data degrades to zero/null results. Only reading requests,
//! loading configuration and writing reports can fail.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TcoError {
    /// File system related errors
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request file is not a JSON object
    #[error("Invalid TCO request: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TcoError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn config(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, TcoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = TcoError::io(
            "deal.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "Failed to access deal.json: no such file");

        let err = TcoError::config(".vehicle-tco.toml", "bad weights");
        assert_eq!(
            err.to_string(),
            "Configuration error in .vehicle-tco.toml: bad weights"
        );
    }
}
