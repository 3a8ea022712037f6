//! Host platform boundary.
//!
//! # Data Flow
//! ```text
//! Embedding environment
//!     → HostSlot::install (one-shot readiness event)
//!     → HostRuntimeAccessor (injected into RequestClient)
//!     → session.rs (credential state, Authorization header)
//!     → feedback.rs (alerts, haptics, lifecycle hooks)
//! ```
//!
//! # Design Decisions
//! - The runtime is always reached through an injected accessor, never a global
//! - Credential state is re-evaluated on every dispatch; nothing is cached
//! - Missing runtime or session is a normal state, not an error
//! - Identity data from the runtime is for pre-filling forms only

pub mod feedback;
pub mod readiness;
pub mod runtime;
pub mod session;

pub use readiness::{poll_until_ready, HostSlot, Readiness};
pub use runtime::{
    ColorScheme, HapticFeedback, HostEvent, HostRuntime, HostRuntimeAccessor, HostUser, ImpactStyle,
    NoHost, NotificationKind, StaticHostRuntime,
};
pub use session::{derive_credential_header, CredentialState, SessionCredential, AUTH_SCHEME};
