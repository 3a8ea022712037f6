//! Error types for the request client.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Errors building a [`RequestClient`](crate::client::RequestClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// No base endpoint configured; requests would be misrouted.
    #[error("Base endpoint is not configured")]
    MissingBaseEndpoint,

    #[error("Base endpoint '{0}' is not an absolute http(s) URL without query or fragment")]
    InvalidBaseEndpoint(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from a single API call, surfaced to the caller unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received.
    #[error("{method} {path} failed: {source}")]
    Transport {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response.
    #[error("{method} {path} returned {status}: {body}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
        body: String,
    },

    /// 2xx response whose body did not match the expected shape.
    #[error("{method} {path} returned an unexpected body: {source}")]
    Decode {
        method: Method,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Rejected locally before anything was sent.
    #[error("Invalid request: {0}")]
    Invalid(String),
}

/// Coarse classification for callers deciding what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    /// 4xx, commonly unauthenticated or malformed.
    Rejected,
    /// 5xx.
    Backend,
    Decode,
    Invalid,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::Rejected => "rejected",
            ErrorKind::Backend => "backend",
            ErrorKind::Decode => "decode",
            ErrorKind::Invalid => "invalid",
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::Status { status, .. } if status.is_server_error() => ErrorKind::Backend,
            ApiError::Status { .. } => ErrorKind::Rejected,
            ApiError::Decode { .. } => ErrorKind::Decode,
            ApiError::Encode(_) | ApiError::Invalid(_) => ErrorKind::Invalid,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Method and path of the request that failed, when one was sent.
    pub fn request(&self) -> Option<(&Method, &str)> {
        match self {
            ApiError::Transport { method, path, .. }
            | ApiError::Status { method, path, .. }
            | ApiError::Decode { method, path, .. } => Some((method, path.as_str())),
            ApiError::Encode(_) | ApiError::Invalid(_) => None,
        }
    }
}

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: StatusCode) -> ApiError {
        ApiError::Status {
            method: Method::GET,
            path: "/users/me/secure".into(),
            status,
            body: r#"{"detail":"Not found"}"#.into(),
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(status_error(StatusCode::UNAUTHORIZED).kind(), ErrorKind::Rejected);
        assert_eq!(status_error(StatusCode::BAD_GATEWAY).kind(), ErrorKind::Backend);
        assert_eq!(ApiError::Invalid("age".into()).kind(), ErrorKind::Invalid);
    }

    #[test]
    fn test_status_error_keeps_request() {
        let err = status_error(StatusCode::NOT_FOUND);
        assert!(err.is_not_found());
        assert_eq!(err.request(), Some((&Method::GET, "/users/me/secure")));
        assert_eq!(
            err.to_string(),
            r#"GET /users/me/secure returned 404 Not Found: {"detail":"Not found"}"#
        );
    }
}
