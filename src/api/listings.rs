//! Apartment listings.

use uuid::Uuid;

use crate::api::types::{LikeListingOutcome, Listing, ListingQuery};
use crate::client::{ApiResult, OutboundRequest, RequestClient};

pub struct ListingsApi<'a> {
    client: &'a RequestClient,
}

impl<'a> ListingsApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self { client }
    }

    /// Filtered search; only the filters that are set are sent.
    pub async fn search(&self, query: &ListingQuery) -> ApiResult<Vec<Listing>> {
        let request = OutboundRequest::get("/listings/")
            .param_opt("lat", query.lat)
            .param_opt("lon", query.lon)
            .param_opt("radius", query.radius)
            .param_opt("price_min", query.price_min)
            .param_opt("price_max", query.price_max)
            .param_opt("limit", query.limit);

        self.client.fetch(request).await
    }

    /// Listings matching the current user's saved search criteria.
    pub async fn for_current_user(&self) -> ApiResult<Vec<Listing>> {
        self.client.fetch(OutboundRequest::get("/listings/search")).await
    }

    pub async fn like(&self, listing_id: Uuid) -> ApiResult<LikeListingOutcome> {
        self.client
            .fetch(OutboundRequest::post(format!("/listings/{}/like", listing_id)))
            .await
    }

    pub async fn liked(&self) -> ApiResult<Vec<Listing>> {
        self.client.fetch(OutboundRequest::get("/listings/liked")).await
    }
}
