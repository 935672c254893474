//! Transport error types.

use crate::errors::VigilError;

/// Why a poll request failed.
///
/// All variants are treated identically by the session: silent abort.
/// The split exists for logs.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request failed: {message}")]
    Network { message: String },

    #[error("Status endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode status response: {message}")]
    Decode { message: String },
}

impl VigilError for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            TransportError::Network { .. } => "TRANSPORT_NETWORK",
            TransportError::Status { .. } => "TRANSPORT_HTTP_STATUS",
            TransportError::Decode { .. } => "TRANSPORT_DECODE",
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TransportError::Decode {
                message: e.to_string(),
            }
        } else {
            TransportError::Network {
                message: e.to_string(),
            }
        }
    }
}
