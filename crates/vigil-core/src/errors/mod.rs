use std::error::Error;

/// Base trait for all application errors
pub trait VigilError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type VigilResult<T> = Result<T, Box<dyn VigilError>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vigil_result() {
        let _result: VigilResult<i32> = Ok(42);
    }

    #[test]
    fn test_transport_error_codes() {
        use crate::transport::TransportError;

        let error = TransportError::Status { status: 502 };
        assert_eq!(error.error_code(), "TRANSPORT_HTTP_STATUS");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_config_error_codes() {
        use crate::config::ConfigError;

        let error = ConfigError::InvalidBootSignalCode {
            code: " ".to_string(),
        };
        assert_eq!(error.error_code(), "INVALID_BOOT_SIGNAL_CODE");
        assert!(error.is_user_error());
    }
}
