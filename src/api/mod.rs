//! Typed wrappers over the backend REST surface.
//!
//! Paths are relative to the base endpoint, which already carries any
//! gateway prefix such as `/api`.

pub mod listings;
pub mod metro;
pub mod types;
pub mod users;
pub mod validation;

pub use listings::ListingsApi;
pub use metro::{filter_stations, MetroApi};
pub use types::{
    CandidateProfile, LikeListingOutcome, LikeUserOutcome, Listing, ListingQuery, Match, MetroStation,
    MetroStationInfo, ProfileFields, UserCreate, UserProfile, UserUpdate,
};
pub use users::UsersApi;

use crate::client::RequestClient;

impl RequestClient {
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn listings(&self) -> ListingsApi<'_> {
        ListingsApi::new(self)
    }

    pub fn metro(&self) -> MetroApi<'_> {
        MetroApi::new(self)
    }
}
