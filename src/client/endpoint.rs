//! Base endpoint and URL construction.

use std::fmt;

use crate::client::error::ClientError;
use crate::config::validation::validate_base_endpoint;

/// Absolute http(s) URL every request path is appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEndpoint(String);

impl BaseEndpoint {
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ClientError::MissingBaseEndpoint);
        }
        validate_base_endpoint(raw).map_err(|_| ClientError::InvalidBaseEndpoint(raw.to_string()))?;

        Ok(Self(raw.trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL for `path`. Exactly one `/` separates base and path, and
    /// `path` itself is left untouched, so the same path always yields the
    /// same URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl fmt::Display for BaseEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
