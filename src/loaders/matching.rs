//! Candidate queue and matches.

use crate::api::{CandidateProfile, LikeUserOutcome, Match};
use crate::client::{ApiError, RequestClient};
use crate::host::feedback::{alert_or_log, haptic, open_telegram_link};
use crate::host::{HapticFeedback, ImpactStyle, NotificationKind};
use crate::loaders::{LoadResult, Loaded};

pub async fn load_candidates(client: &RequestClient, limit: u32) -> LoadResult<Vec<CandidateProfile>> {
    client.users().potential_matches(limit).await.map(Loaded::primary)
}

pub async fn load_matches(client: &RequestClient) -> LoadResult<Vec<Match>> {
    client.users().matches().await.map(Loaded::primary)
}

/// How the user was put in touch with a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contact {
    /// A chat link was opened.
    Chat(String),
    /// No username; the contact summary was shown instead.
    Summary(String),
}

/// Get in touch with a matched user: open a chat when they have a username,
/// otherwise show what is known about them.
pub fn contact_match(client: &RequestClient, user: &CandidateProfile) -> Contact {
    let host = client.host();
    haptic(host, HapticFeedback::Impact(ImpactStyle::Medium));

    match user.fields.username.as_deref().filter(|u| !u.is_empty()) {
        Some(username) => {
            let url = format!("https://t.me/{}", username);
            open_telegram_link(host, &url);
            Contact::Chat(url)
        }
        None => {
            let summary = contact_summary(user);
            alert_or_log(host, &summary);
            Contact::Summary(summary)
        }
    }
}

fn contact_summary(user: &CandidateProfile) -> String {
    let f = &user.fields;
    let mut summary = format!("Get in touch:\n\n👤 {}\n", user.display_name());
    if let Some(age) = f.age {
        summary.push_str(&format!("🎂 {} years\n", age));
    }
    if let Some(station) = f.metro_station.as_deref().filter(|s| !s.is_empty()) {
        summary.push_str(&format!("🚇 {}\n", station));
    }
    if let Some(bio) = f.bio.as_deref().filter(|s| !s.is_empty()) {
        summary.push_str(&format!("💬 {}", bio));
    }
    summary.trim_end().to_string()
}

/// What a like did to the queue.
#[derive(Debug)]
pub enum LikeResult {
    /// Queue was already exhausted.
    Empty,
    Liked(LikeUserOutcome),
    /// The like failed; the cursor did not move.
    Failed(ApiError),
}

/// Order-significant list of candidates with a cursor.
#[derive(Debug, Clone, Default)]
pub struct CandidateQueue {
    candidates: Vec<CandidateProfile>,
    cursor: usize,
}

impl CandidateQueue {
    pub fn new(candidates: Vec<CandidateProfile>) -> Self {
        Self { candidates, cursor: 0 }
    }

    /// Fetch a fresh queue from the server.
    pub async fn load(client: &RequestClient, limit: u32) -> Result<Self, ApiError> {
        match load_candidates(client, limit).await {
            Ok(loaded) => Ok(Self::new(loaded.into_inner())),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load candidates");
                alert_or_log(client.host(), "Could not load candidates");
                Err(e)
            }
        }
    }

    pub fn current(&self) -> Option<&CandidateProfile> {
        self.candidates.get(self.cursor)
    }

    pub fn remaining(&self) -> usize {
        self.candidates.len().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }

    fn advance(&mut self) {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
        }
    }

    /// Skip the current candidate.
    pub fn pass(&mut self, client: &RequestClient) -> Option<&CandidateProfile> {
        haptic(client.host(), HapticFeedback::Selection);
        self.advance();
        self.current()
    }

    /// Like the current candidate and move on. A mutual like is announced
    /// with the server's message.
    pub async fn like(&mut self, client: &RequestClient) -> LikeResult {
        let Some(candidate) = self.current() else {
            return LikeResult::Empty;
        };
        let user_id = candidate.id;
        let host = client.host();

        haptic(host, HapticFeedback::Impact(ImpactStyle::Light));

        match client.users().like(user_id).await {
            Ok(outcome) => {
                if outcome.is_match {
                    haptic(host, HapticFeedback::Notification(NotificationKind::Success));
                    let message = outcome.message.as_deref().unwrap_or("It's a match!");
                    alert_or_log(host, &format!("🎉 {}", message));
                }
                self.advance();
                LikeResult::Liked(outcome)
            }
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "Failed to like user");
                alert_or_log(host, "Could not send the like");
                haptic(host, HapticFeedback::Notification(NotificationKind::Error));
                LikeResult::Failed(e)
            }
        }
    }
}
