//! One-shot geolocation with a fixed fallback.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::config::GeolocationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl From<&GeolocationConfig> for Coordinates {
    fn from(config: &GeolocationConfig) -> Self {
        Self {
            lat: config.fallback_lat,
            lon: config.fallback_lon,
        }
    }
}

/// Source of the device position. `None` when denied or unavailable.
pub trait GeoProvider {
    fn current_position(&self) -> impl Future<Output = Option<Coordinates>> + Send;
}

/// A provider that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

impl GeoProvider for FixedPosition {
    async fn current_position(&self) -> Option<Coordinates> {
        Some(self.0)
    }
}

/// A provider with no position, as when permission is denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl GeoProvider for Unavailable {
    async fn current_position(&self) -> Option<Coordinates> {
        None
    }
}

pub async fn locate_or_fallback<G: GeoProvider>(geo: &G, fallback: Coordinates) -> Coordinates {
    match geo.current_position().await {
        Some(position) => position,
        None => {
            tracing::info!(lat = fallback.lat, lon = fallback.lon, "Position unavailable, using fallback");
            fallback
        }
    }
}
