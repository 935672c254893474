//! Configuration error types.

use crate::errors::VigilError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ParseError { message: String },

    #[error("Failed to read config file '{path}': {message}")]
    IoError { path: String, message: String },

    #[error("Invalid boot signal code: {code:?} (codes must be non-empty)")]
    InvalidBootSignalCode { code: String },
}

impl VigilError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
            ConfigError::InvalidBootSignalCode { .. } => "INVALID_BOOT_SIGNAL_CODE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ParseError { .. } | ConfigError::InvalidBootSignalCode { .. }
        )
    }
}
