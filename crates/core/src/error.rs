use thiserror::Error;

/// Result type alias for nutrichat-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the NutriChat client
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Remote webhook call failure
    ///
    /// One kind covers network failure, non-success status, and a malformed
    /// response body alike; the caller only ever surfaces the description.
    #[error("remote call failed: {0}")]
    RemoteCall(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a remote-call failure from anything displayable
    pub fn remote(description: impl std::fmt::Display) -> Self {
        Error::RemoteCall(description.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err: Error = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));
        assert_eq!(io_err.to_string(), "I/O error: file not found");

        let config_err: Error = Error::Config("invalid endpoint".to_string());
        assert_eq!(config_err.to_string(), "configuration error: invalid endpoint");

        let remote_err: Error = Error::RemoteCall("connection refused".to_string());
        assert_eq!(remote_err.to_string(), "remote call failed: connection refused");

        let parse_err: Error = Error::Parse("invalid JSON".to_string());
        assert_eq!(parse_err.to_string(), "parse error: invalid JSON");

        let other_err: Error = Error::Other("something went wrong".to_string());
        assert_eq!(other_err.to_string(), "something went wrong");
    }

    #[test]
    fn test_remote_constructor() {
        let err = Error::remote("HTTP 502 Bad Gateway");
        assert!(matches!(err, Error::RemoteCall(_)));
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: Error = io_err.into();
        assert_eq!(error.to_string(), "I/O error: denied");
    }

    #[test]
    fn test_result_type_alias() {
        let ok: Result<i32> = Ok(42);
        assert!(ok.is_ok());

        let err: Result<i32> = Err(Error::Other("error".to_string()));
        assert!(err.is_err());
    }
}
