//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, apply env overrides)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → handed to RequestClient::configure and the loaders
//! ```
//!
//! # Design Decisions
//! - Loaded once at process start; the base endpoint never changes afterwards
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with_endpoint, ConfigError, BACKEND_URL_ENV};
pub use schema::ApiConfig;
pub use schema::ClientConfig;
pub use schema::GeolocationConfig;
pub use schema::HostConfig;
pub use schema::LoadingConfig;
pub use schema::ObservabilityConfig;
