//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend REST surface.
    pub api: ApiConfig,

    /// Host runtime readiness settings.
    pub host: HostConfig,

    /// Geolocation fallback.
    pub geolocation: GeolocationConfig,

    /// Limits used by the data loaders.
    pub loading: LoadingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Base endpoint every request path is appended to
    /// (e.g., "https://example.org/api"). No default on purpose.
    pub base_endpoint: Option<String>,
}

/// Host runtime readiness wait.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// Polling interval in milliseconds, for hosts without a ready event.
    pub ready_poll_interval_ms: u64,

    /// Upper bound on the readiness wait in milliseconds.
    pub ready_timeout_ms: u64,
}

impl HostConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.ready_poll_interval_ms)
    }

    pub fn ready_timeout(&self) -> Duration {
        Duration::from_millis(self.ready_timeout_ms)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            ready_poll_interval_ms: 100,
            ready_timeout_ms: 5000,
        }
    }
}

/// Coordinates used when geolocation is denied or unavailable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub fallback_lat: f64,
    pub fallback_lon: f64,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        // Moscow city centre
        Self {
            fallback_lat: 55.7558,
            fallback_lon: 37.6176,
        }
    }
}

/// Limits for the data loaders.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Limit of the unfiltered search used when the curated listings fail.
    pub listings_fallback_limit: u32,

    /// Same fallback, for the map view.
    pub map_fallback_limit: u32,

    /// Number of candidates requested per queue refill.
    pub candidate_limit: u32,

    /// Default map search radius in meters.
    pub map_radius_m: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            listings_fallback_limit: 50,
            map_fallback_limit: 100,
            candidate_limit: 20,
            map_radius_m: 1000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
