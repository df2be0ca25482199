//! Fixture error types
//!
//! Errors that can occur while fetching or decoding the Olympic fixture.
//! None of these cross the view boundary: the store turns any of them into
//! [`StoreState::Failed`](crate::store::StoreState::Failed).

use thiserror::Error;

/// Errors that can occur while loading the fixture
#[derive(Error, Debug)]
pub enum FetchError {
    /// Reading the fixture from disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level failure (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The document is not a valid sequence of country records
    #[error("Parse error: {0}")]
    Parse(String),

    /// Two country records share the same identifier
    #[error("Duplicate country id: {0}")]
    DuplicateId(i64),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[cfg(feature = "cli")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Result type alias for fixture operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Status {
            status: 404,
            url: "http://localhost/olympic.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 404 from http://localhost/olympic.json"
        );

        let err = FetchError::DuplicateId(3);
        assert_eq!(err.to_string(), "Duplicate country id: 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let fetch_err: FetchError = io_err.into();
        assert!(matches!(fetch_err, FetchError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let fetch_err: FetchError = json_err.into();
        assert!(matches!(fetch_err, FetchError::Parse(_)));
    }
}
