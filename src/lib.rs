//! Roommate Mini App client library.
//!
//! Authenticated access to the roommate/apartment-matching backend from
//! inside a messaging-platform Mini App: the request client, the host
//! runtime boundary, typed resource groups and the shared data loaders.

pub mod api;
pub mod client;
pub mod config;
pub mod host;
pub mod loaders;
pub mod observability;

pub use client::{ApiError, RequestClient};
pub use config::ClientConfig;
pub use host::{HostRuntime, HostRuntimeAccessor, HostSlot};
