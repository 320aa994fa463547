//! Error types shared across Clipdraft crates.

use std::path::PathBuf;

/// Top-level error type for Clipdraft operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipdraftError {
    #[error("Timing error: {message}")]
    Timing { message: String },

    #[error("Assembly error: {message}")]
    Assembly { message: String },

    #[error("Compatibility error: {message}")]
    Compatibility { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ClipdraftError.
pub type ClipdraftResult<T> = Result<T, ClipdraftError>;

impl ClipdraftError {
    pub fn timing(msg: impl Into<String>) -> Self {
        Self::Timing {
            message: msg.into(),
        }
    }

    pub fn assembly(msg: impl Into<String>) -> Self {
        Self::Assembly {
            message: msg.into(),
        }
    }

    pub fn compatibility(msg: impl Into<String>) -> Self {
        Self::Compatibility {
            message: msg.into(),
        }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
