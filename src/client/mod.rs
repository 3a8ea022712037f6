//! Request client subsystem.
//!
//! # Data Flow
//! ```text
//! Caller (api/, loaders/)
//!     → request.rs (OutboundRequest: method, path, params, body)
//!     → dispatch.rs (RequestClient::dispatch)
//!         → endpoint.rs (base endpoint + path)
//!         → host::session (Authorization header, if any)
//!         → reqwest
//!     → InboundResponse on 2xx, ApiError otherwise
//! ```
//!
//! # Design Decisions
//! - Configured once; the base endpoint is immutable afterwards
//! - Identity is attached in exactly one place
//! - No retries, no backoff, no classification: errors go back unchanged
//! - Cheap to clone; holds no mutable state

pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod request;

pub use dispatch::RequestClient;
pub use endpoint::BaseEndpoint;
pub use error::{ApiError, ApiResult, ClientError, ErrorKind};
pub use request::{InboundResponse, OutboundRequest};
