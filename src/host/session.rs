//! Session credential and Authorization header derivation.
//!
//! # States
//! - NoRuntime: host runtime not available
//! - RuntimeNoSession: runtime available, raw session data absent or empty
//! - RuntimeWithSession: runtime available with raw session data
//!
//! # State Transitions
//! ```text
//! NoRuntime → RuntimeNoSession: runtime appears without session data
//! NoRuntime → RuntimeWithSession: runtime appears with session data
//! RuntimeNoSession → RuntimeWithSession: session data appears
//! ```
//!
//! Only RuntimeWithSession yields a header. There is no terminal state; the
//! state is observed again for every request.

use std::fmt;

use reqwest::header::HeaderValue;

use crate::host::runtime::HostRuntimeAccessor;

/// The single supported authentication scheme.
pub const AUTH_SCHEME: &str = "Bearer";

/// Opaque signed proof of the launching user's identity.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    /// Wrap raw session data. Empty data is not a credential.
    pub fn from_raw(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Bearer <raw>`, with the raw data untouched.
    pub fn authorization_value(&self) -> String {
        format!("{} {}", AUTH_SCHEME, self.0)
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionCredential(<redacted, {} bytes>)", self.0.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialState {
    NoRuntime,
    RuntimeNoSession,
    RuntimeWithSession(SessionCredential),
}

impl CredentialState {
    /// Observe the current state through the accessor.
    pub fn observe(accessor: &dyn HostRuntimeAccessor) -> Self {
        let Some(runtime) = accessor.runtime() else {
            return CredentialState::NoRuntime;
        };

        match runtime.raw_init_data().and_then(SessionCredential::from_raw) {
            Some(credential) => CredentialState::RuntimeWithSession(credential),
            None => CredentialState::RuntimeNoSession,
        }
    }

    pub fn credential(&self) -> Option<&SessionCredential> {
        match self {
            CredentialState::RuntimeWithSession(credential) => Some(credential),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CredentialState::NoRuntime => "no_runtime",
            CredentialState::RuntimeNoSession => "runtime_no_session",
            CredentialState::RuntimeWithSession(_) => "runtime_with_session",
        }
    }
}

/// Authorization header value for the current state, if any.
///
/// Never fabricates a value: without real session data the request goes out
/// unauthenticated and the backend decides.
pub fn derive_credential_header(accessor: &dyn HostRuntimeAccessor) -> Option<HeaderValue> {
    let state = CredentialState::observe(accessor);
    let credential = state.credential()?;

    match HeaderValue::from_str(&credential.authorization_value()) {
        Ok(mut value) => {
            value.set_sensitive(true);
            Some(value)
        }
        Err(_) => {
            tracing::warn!(
                len = credential.as_str().len(),
                "Session data is not a valid header value, sending unauthenticated"
            );
            None
        }
    }
}
