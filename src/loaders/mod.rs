//! Data loading shared by every view.
//!
//! # Data Flow
//! ```text
//! View needs data
//!     → loader function (this module)
//!     → api/ resource group → RequestClient
//!     → Loaded<T> { data, source } or ApiError
//!     → view decides what to show; loaders only alert where a view would
//! ```
//!
//! # Design Decisions
//! - One uniform result shape for every load
//! - Fallbacks are an explicit second query, reported via LoadSource
//! - No caching; every call re-fetches

pub mod geo;
pub mod listings;
pub mod matching;
pub mod profile;

pub use geo::{locate_or_fallback, Coordinates, FixedPosition, GeoProvider, Unavailable};
pub use listings::{
    like_listing, load_liked_listings, load_listings, load_listings_near, load_match_listings, PriceFilter,
};
pub use matching::{contact_match, load_candidates, load_matches, CandidateQueue, Contact, LikeResult};
pub use profile::{load_profile, save_profile, ProfileDraft};

use crate::client::ApiError;

/// Which query produced the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Primary,
    Fallback,
}

/// Data plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub source: LoadSource,
}

impl<T> Loaded<T> {
    pub fn primary(data: T) -> Self {
        Self {
            data,
            source: LoadSource::Primary,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            source: LoadSource::Fallback,
        }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Result shape of every loader.
pub type LoadResult<T> = Result<Loaded<T>, ApiError>;
