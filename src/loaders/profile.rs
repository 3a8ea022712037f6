//! The current user's profile: load, draft, save.

use crate::api::{ProfileFields, UserCreate, UserProfile, UserUpdate};
use crate::client::{ApiError, ApiResult, RequestClient};
use crate::host::feedback::{alert_or_log, haptic};
use crate::host::{HapticFeedback, HostUser, ImpactStyle, NotificationKind};
use crate::loaders::{LoadResult, Loaded};

/// Radius used when the stored profile has none.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 1000;

/// Load the stored profile. `None` when it has not been created yet (404).
pub async fn load_profile(client: &RequestClient) -> LoadResult<Option<UserProfile>> {
    match client.users().current().await {
        Ok(profile) => Ok(Loaded::primary(Some(profile))),
        Err(e) if e.is_not_found() => {
            tracing::info!("Profile not found, a new one will be created on save");
            Ok(Loaded::primary(None))
        }
        Err(e) => Err(e),
    }
}

/// Editable profile state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub age: Option<u32>,
    pub bio: String,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub metro_station: String,
    pub search_radius: u32,
    pub photo_url: Option<String>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: None,
            bio: String::new(),
            price_min: None,
            price_max: None,
            metro_station: String::new(),
            search_radius: DEFAULT_SEARCH_RADIUS_M,
            photo_url: None,
        }
    }
}

impl ProfileDraft {
    /// Start from the stored profile, or pre-fill name and photo from the
    /// host identity when there is none.
    pub fn new(profile: Option<&UserProfile>, host_user: Option<&HostUser>) -> Self {
        match profile {
            Some(profile) => {
                let f = &profile.fields;
                Self {
                    first_name: f.first_name.clone().unwrap_or_default(),
                    last_name: f.last_name.clone().unwrap_or_default(),
                    age: f.age,
                    bio: f.bio.clone().unwrap_or_default(),
                    price_min: f.price_min,
                    price_max: f.price_max,
                    metro_station: f.metro_station.clone().unwrap_or_default(),
                    search_radius: f.search_radius.unwrap_or(DEFAULT_SEARCH_RADIUS_M),
                    photo_url: f.photo_url.clone(),
                }
            }
            None => match host_user {
                Some(user) => Self {
                    first_name: user.first_name.clone(),
                    last_name: user.last_name.clone().unwrap_or_default(),
                    photo_url: user.photo_url.clone(),
                    ..Self::default()
                },
                None => Self::default(),
            },
        }
    }

    /// First required field that is missing, as a user-facing message.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.first_name.trim().is_empty() {
            Some("Please enter your first name")
        } else if self.age.is_none() {
            Some("Please fill in the required fields (name and age)")
        } else if self.metro_station.trim().is_empty() {
            Some("Please choose a metro station")
        } else {
            None
        }
    }

    fn fields(&self) -> ProfileFields {
        fn non_empty(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }

        ProfileFields {
            username: None,
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            photo_url: self.photo_url.clone(),
            age: self.age,
            bio: non_empty(&self.bio),
            price_min: self.price_min,
            price_max: self.price_max,
            metro_station: non_empty(&self.metro_station),
            search_radius: Some(self.search_radius),
        }
    }

    /// Every field the draft edits is sent, so a cleared field is cleared on
    /// the server too.
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate::replace_with(self.fields())
    }

    pub fn to_create(&self, telegram_id: i64) -> UserCreate {
        UserCreate {
            telegram_id,
            fields: self.fields(),
            lat: None,
            lon: None,
        }
    }
}

/// Save the draft: update when a profile exists, otherwise create one for
/// the host identity.
///
/// Missing required fields are reported through an alert and an
/// [`ApiError::Invalid`] without dispatching anything.
pub async fn save_profile(client: &RequestClient, draft: &ProfileDraft, exists: bool) -> ApiResult<UserProfile> {
    let host = client.host();

    if let Some(message) = draft.missing_required() {
        alert_or_log(host, message);
        return Err(ApiError::Invalid(message.to_string()));
    }

    haptic(host, HapticFeedback::Impact(ImpactStyle::Light));

    let result = if exists {
        client.users().update_profile(&draft.to_update()).await
    } else {
        let telegram_id = host.runtime().and_then(|rt| rt.init_data_user()).map(|user| user.id);
        match telegram_id {
            Some(id) => client.users().create_or_update(&draft.to_create(id)).await,
            None => Err(ApiError::Invalid("host identity unavailable, cannot create profile".to_string())),
        }
    };

    match &result {
        Ok(_) => {
            alert_or_log(host, "Profile saved!");
            haptic(host, HapticFeedback::Notification(NotificationKind::Success));
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to save profile");
            alert_or_log(host, "Could not save the profile");
            haptic(host, HapticFeedback::Notification(NotificationKind::Error));
        }
    }

    result
}
