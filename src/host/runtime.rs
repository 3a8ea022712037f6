//! Host runtime interface and an in-process implementation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Best-effort decoded identity of the launching user.
///
/// Never used for authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
    Rigid,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
    Warning,
}

/// Tactile feedback, keyed by event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticFeedback {
    Impact(ImpactStyle),
    Notification(NotificationKind),
    Selection,
}

/// The embedding application's bridge object.
pub trait HostRuntime: Send + Sync {
    /// Raw signed session string, verbatim. `None` or empty when the host
    /// has not provided one.
    fn raw_init_data(&self) -> Option<String>;

    /// Decoded identity, for UI pre-fill.
    fn init_data_user(&self) -> Option<HostUser>;

    fn color_scheme(&self) -> ColorScheme;

    /// Signal that the UI is ready to be shown.
    fn ready(&self);

    /// Ask the host to expand the UI to full size.
    fn expand(&self);

    fn haptic(&self, feedback: HapticFeedback);

    fn show_alert(&self, message: &str);

    fn show_confirm(&self, message: &str) -> bool;

    fn open_link(&self, url: &str);

    fn open_telegram_link(&self, url: &str);
}

/// Lookup of the host runtime, injected wherever the runtime is needed.
pub trait HostRuntimeAccessor: Send + Sync {
    /// The runtime if it is present right now.
    fn runtime(&self) -> Option<Arc<dyn HostRuntime>>;
}

/// Accessor for non-hosted contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl HostRuntimeAccessor for NoHost {
    fn runtime(&self) -> Option<Arc<dyn HostRuntime>> {
        None
    }
}

/// Calls made against a [`StaticHostRuntime`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Ready,
    Expand,
    Haptic(HapticFeedback),
    Alert(String),
    Confirm(String),
    OpenLink(String),
    OpenTelegramLink(String),
}

/// In-process host runtime with fixed identity data.
///
/// Records every lifecycle and feedback call so that callers (the CLI, tests)
/// can inspect what the UI would have shown.
pub struct StaticHostRuntime {
    init_data: Mutex<Option<String>>,
    user: Option<HostUser>,
    color_scheme: ColorScheme,
    confirm_answer: bool,
    events: Mutex<Vec<HostEvent>>,
}

impl StaticHostRuntime {
    pub fn new(init_data: Option<String>) -> Self {
        Self {
            init_data: Mutex::new(init_data),
            user: None,
            color_scheme: ColorScheme::default(),
            confirm_answer: true,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn with_user(mut self, user: HostUser) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn with_confirm_answer(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    /// Replace the session data, as the host does once it finishes
    /// initializing.
    pub fn set_init_data(&self, init_data: Option<String>) {
        *lock(&self.init_data) = init_data;
    }

    pub fn events(&self) -> Vec<HostEvent> {
        lock(&self.events).clone()
    }

    fn record(&self, event: HostEvent) {
        lock(&self.events).push(event);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl HostRuntime for StaticHostRuntime {
    fn raw_init_data(&self) -> Option<String> {
        lock(&self.init_data).clone()
    }

    fn init_data_user(&self) -> Option<HostUser> {
        self.user.clone()
    }

    fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    fn ready(&self) {
        self.record(HostEvent::Ready);
    }

    fn expand(&self) {
        self.record(HostEvent::Expand);
    }

    fn haptic(&self, feedback: HapticFeedback) {
        self.record(HostEvent::Haptic(feedback));
    }

    fn show_alert(&self, message: &str) {
        tracing::info!(message, "Host alert");
        self.record(HostEvent::Alert(message.to_string()));
    }

    fn show_confirm(&self, message: &str) -> bool {
        self.record(HostEvent::Confirm(message.to_string()));
        self.confirm_answer
    }

    fn open_link(&self, url: &str) {
        self.record(HostEvent::OpenLink(url.to_string()));
    }

    fn open_telegram_link(&self, url: &str) {
        self.record(HostEvent::OpenTelegramLink(url.to_string()));
    }
}
