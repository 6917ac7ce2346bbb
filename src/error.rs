//! API Error Types
//!
//! One error type shared by polling, commands and the detail view.

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response was received (network down, DNS, timeout, aborted)
    #[error("transport error: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },

    /// 2xx response whose body did not match the expected shape
    #[error("malformed response body: {0}")]
    Decode(String),

    /// Valid response that is unusable for the operation (e.g. zero chapters)
    #[error("empty result: {0}")]
    EmptyResult(&'static str),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// True for failures that usually clear up on their own (network, 5xx).
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::RequestFailed { status } => *status >= 500,
            ApiError::Decode(_) | ApiError::EmptyResult(_) => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(ApiError::Transport("offline".into()).is_transient());
        assert!(ApiError::RequestFailed { status: 502 }.is_transient());
        assert!(!ApiError::RequestFailed { status: 404 }.is_transient());
        assert!(!ApiError::Decode("eof".into()).is_transient());
        assert!(!ApiError::EmptyResult("chapters").is_transient());
    }

    #[test]
    fn display_carries_status() {
        let err = ApiError::RequestFailed { status: 400 };
        assert_eq!(err.to_string(), "request failed with status 400");
    }
}
