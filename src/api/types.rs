//! Request and response bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile fields shared by every user payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro_station: Option<String>,
    /// Search radius in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_radius: Option<u32>,
}

/// The current user's stored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub telegram_id: i64,
    #[serde(flatten)]
    pub fields: ProfileFields,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Another user's profile as offered in the candidate queue or a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: ProfileFields,
    /// Kilometers from the current user.
    #[serde(default)]
    pub distance: Option<f64>,
}

impl CandidateProfile {
    pub fn display_name(&self) -> String {
        match (&self.fields.first_name, &self.fields.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.fields.username.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCreate {
    pub telegram_id: i64,
    #[serde(flatten)]
    pub fields: ProfileFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// Partial profile update.
///
/// Outer `None` leaves the stored value alone and is not sent. `Some(None)`
/// is sent as an explicit `null`, which clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro_station: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_radius: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl UserUpdate {
    /// Send every profile field, nulls included. Used when the whole profile
    /// is being replaced by an edited copy.
    pub fn replace_with(fields: ProfileFields) -> Self {
        Self {
            username: fields.username.map(Some),
            first_name: Some(fields.first_name),
            last_name: Some(fields.last_name),
            photo_url: Some(fields.photo_url),
            age: Some(fields.age),
            bio: Some(fields.bio),
            price_min: Some(fields.price_min),
            price_max: Some(fields.price_max),
            metro_station: Some(fields.metro_station),
            search_radius: Some(fields.search_radius),
            lat: None,
            lon: None,
        }
    }
}

/// Only the fields that are set; everything else is left untouched.
impl From<ProfileFields> for UserUpdate {
    fn from(fields: ProfileFields) -> Self {
        Self {
            username: fields.username.map(Some),
            first_name: fields.first_name.map(Some),
            last_name: fields.last_name.map(Some),
            photo_url: fields.photo_url.map(Some),
            age: fields.age.map(Some),
            bio: fields.bio.map(Some),
            price_min: fields.price_min.map(Some),
            price_max: fields.price_max.map(Some),
            metro_station: fields.metro_station.map(Some),
            search_radius: fields.search_radius.map(Some),
            lat: None,
            lon: None,
        }
    }
}

/// A mutual like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub user: CandidateProfile,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: u32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rooms: Option<u32>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub total_floors: Option<i32>,
    #[serde(default)]
    pub metro_station: Option<String>,
    /// Minutes or meters to the station, as the backend reports it.
    #[serde(default)]
    pub metro_distance: Option<u32>,
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    pub lat: f64,
    pub lon: f64,
    /// Kilometers from the search point.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub is_liked: Option<bool>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Filters for the listings search. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Meters.
    pub radius: Option<u32>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub limit: Option<u32>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn near(mut self, lat: f64, lon: f64, radius: u32) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self.radius = Some(radius);
        self
    }

    pub fn price(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeUserOutcome {
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub already_liked: bool,
    #[serde(default, rename = "match")]
    pub is_match: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeListingOutcome {
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub already_liked: bool,
}

/// Station details. Fields beyond the known ones are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetroStationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroStation {
    pub name: String,
    #[serde(flatten)]
    pub info: MetroStationInfo,
}
