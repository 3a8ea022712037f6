//! User profile, candidate queue, likes and matches.

use uuid::Uuid;

use crate::api::types::{CandidateProfile, LikeUserOutcome, Listing, Match, UserCreate, UserProfile, UserUpdate};
use crate::api::validation::{validate_create, validate_update};
use crate::client::{ApiError, ApiResult, OutboundRequest, RequestClient};

pub struct UsersApi<'a> {
    client: &'a RequestClient,
}

impl<'a> UsersApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self { client }
    }

    /// Create the current user's profile, or update it if it exists.
    pub async fn create_or_update(&self, user: &UserCreate) -> ApiResult<UserProfile> {
        validate_create(user).map_err(|problems| ApiError::Invalid(problems.join(", ")))?;
        self.client.fetch(OutboundRequest::post("/users/secure").json(user)?).await
    }

    /// The current user's profile. 404 means it has not been created yet.
    pub async fn current(&self) -> ApiResult<UserProfile> {
        self.client.fetch(OutboundRequest::get("/users/me/secure")).await
    }

    pub async fn update_profile(&self, update: &UserUpdate) -> ApiResult<UserProfile> {
        validate_update(update).map_err(|problems| ApiError::Invalid(problems.join(", ")))?;
        self.client.fetch(OutboundRequest::put("/users/profile/secure").json(update)?).await
    }

    /// Candidate queue, in the server's order.
    pub async fn potential_matches(&self, limit: u32) -> ApiResult<Vec<CandidateProfile>> {
        self.client
            .fetch(OutboundRequest::get("/users/potential-matches").param("limit", limit))
            .await
    }

    pub async fn like(&self, user_id: Uuid) -> ApiResult<LikeUserOutcome> {
        self.client.fetch(OutboundRequest::post(format!("/users/{}/like", user_id))).await
    }

    /// Mutual likes.
    pub async fn matches(&self) -> ApiResult<Vec<Match>> {
        self.client.fetch(OutboundRequest::get("/users/matches")).await
    }

    /// Listings liked by a matched user.
    pub async fn liked_listings_of(&self, user_id: Uuid) -> ApiResult<Vec<Listing>> {
        self.client
            .fetch(OutboundRequest::get(format!("/users/{}/liked-listings", user_id)))
            .await
    }
}
