//! Listings for the list and map views.

use uuid::Uuid;

use crate::api::{LikeListingOutcome, Listing, ListingQuery};
use crate::client::{ApiResult, RequestClient};
use crate::host::feedback::{alert_or_log, haptic};
use crate::host::{HapticFeedback, ImpactStyle, NotificationKind};
use crate::loaders::geo::Coordinates;
use crate::loaders::{LoadResult, Loaded};
use crate::observability::metrics;

/// Optional price bounds from the map filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceFilter {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// Listings curated for the current user; on failure, one unfiltered
/// search limited to `fallback_limit`.
///
/// The error returned is the fallback's, since that is the last thing tried.
pub async fn load_listings(client: &RequestClient, fallback_limit: u32) -> LoadResult<Vec<Listing>> {
    match client.listings().for_current_user().await {
        Ok(listings) => Ok(Loaded::primary(listings)),
        Err(primary) => {
            tracing::warn!(
                error = %primary,
                fallback_limit,
                "Curated listings failed, falling back to unfiltered search"
            );
            metrics::record_listing_fallback();

            let query = ListingQuery::new().limit(fallback_limit);
            match client.listings().search(&query).await {
                Ok(listings) => Ok(Loaded::fallback(listings)),
                Err(e) => {
                    tracing::error!(error = %e, "Fallback listings search failed");
                    alert_or_log(client.host(), "Could not load listings");
                    Err(e)
                }
            }
        }
    }
}

/// Listings within `radius_m` meters of `at`.
pub async fn load_listings_near(
    client: &RequestClient,
    at: Coordinates,
    radius_m: u32,
    price: PriceFilter,
    limit: u32,
) -> LoadResult<Vec<Listing>> {
    let query = ListingQuery::new()
        .near(at.lat, at.lon, radius_m)
        .price(price.min, price.max)
        .limit(limit);

    client.listings().search(&query).await.map(Loaded::primary)
}

pub async fn load_liked_listings(client: &RequestClient) -> LoadResult<Vec<Listing>> {
    client.listings().liked().await.map(Loaded::primary)
}

/// Listings another user liked, for a match's detail view. Errors read as
/// "nothing liked yet".
pub async fn load_match_listings(client: &RequestClient, user_id: Uuid) -> Loaded<Vec<Listing>> {
    match client.users().liked_listings_of(user_id).await {
        Ok(listings) => Loaded::primary(listings),
        Err(e) => {
            tracing::warn!(%user_id, error = %e, "Failed to load listings liked by match");
            Loaded::primary(Vec::new())
        }
    }
}

/// Like a listing with the usual feedback: a light tap up front, a success
/// notification once stored, an alert if it fails.
pub async fn like_listing(client: &RequestClient, listing_id: Uuid) -> ApiResult<LikeListingOutcome> {
    let host = client.host();
    haptic(host, HapticFeedback::Impact(ImpactStyle::Light));

    match client.listings().like(listing_id).await {
        Ok(outcome) => {
            haptic(host, HapticFeedback::Notification(NotificationKind::Success));
            Ok(outcome)
        }
        Err(e) => {
            tracing::warn!(%listing_id, error = %e, "Failed to like listing");
            alert_or_log(host, "Could not like the listing");
            Err(e)
        }
    }
}
