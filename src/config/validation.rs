//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require a usable base endpoint
//! - Validate value ranges (intervals > 0, coordinates in range)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.base_endpoint is not set")]
    MissingBaseEndpoint,

    #[error("api.base_endpoint '{0}' is not an absolute http(s) URL without query or fragment")]
    InvalidBaseEndpoint(String),

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("host.ready_poll_interval_ms ({interval}) exceeds host.ready_timeout_ms ({timeout})")]
    PollIntervalExceedsTimeout { interval: u64, timeout: u64 },

    #[error("geolocation fallback ({lat}, {lon}) is out of range")]
    FallbackOutOfRange { lat: String, lon: String },
}

/// Check that `raw` is an absolute http(s) URL that paths can be appended
/// to, so no query string or fragment.
pub fn validate_base_endpoint(raw: &str) -> Result<(), ValidationError> {
    match Url::parse(raw) {
        Ok(url)
            if matches!(url.scheme(), "http" | "https")
                && url.has_host()
                && url.query().is_none()
                && url.fragment().is_none() =>
        {
            Ok(())
        }
        _ => Err(ValidationError::InvalidBaseEndpoint(raw.to_string())),
    }
}

pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.api.base_endpoint.as_deref().map(str::trim) {
        None | Some("") => errors.push(ValidationError::MissingBaseEndpoint),
        Some(raw) => {
            if let Err(e) = validate_base_endpoint(raw) {
                errors.push(e);
            }
        }
    }

    let host = &config.host;
    if host.ready_poll_interval_ms == 0 {
        errors.push(ValidationError::Zero { field: "host.ready_poll_interval_ms" });
    }
    if host.ready_timeout_ms == 0 {
        errors.push(ValidationError::Zero { field: "host.ready_timeout_ms" });
    }
    if host.ready_poll_interval_ms > host.ready_timeout_ms && host.ready_timeout_ms > 0 {
        errors.push(ValidationError::PollIntervalExceedsTimeout {
            interval: host.ready_poll_interval_ms,
            timeout: host.ready_timeout_ms,
        });
    }

    let loading = &config.loading;
    for (field, value) in [
        ("loading.listings_fallback_limit", loading.listings_fallback_limit),
        ("loading.map_fallback_limit", loading.map_fallback_limit),
        ("loading.candidate_limit", loading.candidate_limit),
        ("loading.map_radius_m", loading.map_radius_m),
    ] {
        if value == 0 {
            errors.push(ValidationError::Zero { field });
        }
    }

    let geo = &config.geolocation;
    if !(-90.0..=90.0).contains(&geo.fallback_lat) || !(-180.0..=180.0).contains(&geo.fallback_lon) {
        errors.push(ValidationError::FallbackOutOfRange {
            lat: geo.fallback_lat.to_string(),
            lon: geo.fallback_lon.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.api.base_endpoint = Some("https://rooms.example/api".into());
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid()).is_ok());
    }

    #[test]
    fn test_missing_endpoint_rejected() {
        let errors = validate_config(&ClientConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingBaseEndpoint]);

        let mut config = valid();
        config.api.base_endpoint = Some("   ".into());
        assert!(validate_config(&config).unwrap_err().contains(&ValidationError::MissingBaseEndpoint));
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let mut config = valid();
        config.api.base_endpoint = Some("/api".into());
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidBaseEndpoint(_)));
    }

    #[test]
    fn test_endpoint_with_query_or_fragment_rejected() {
        assert!(validate_base_endpoint("https://h/api?k=1").is_err());
        assert!(validate_base_endpoint("https://h/api#top").is_err());
        assert!(validate_base_endpoint("https://h/api").is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ClientConfig::default();
        config.host.ready_poll_interval_ms = 0;
        config.loading.candidate_limit = 0;
        config.geolocation.fallback_lat = 120.0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::Zero { field: "loading.candidate_limit" }));
    }

    #[test]
    fn test_poll_interval_must_fit_in_timeout() {
        let mut config = valid();
        config.host.ready_poll_interval_ms = 6000;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::PollIntervalExceedsTimeout { interval: 6000, timeout: 5000 }]
        );
    }
}
