//! The request client.
//!
//! # Responsibilities
//! - Hold the base endpoint and the shared HTTP connection pool
//! - Attach the Authorization header derived from the host runtime
//! - Surface every non-2xx or transport failure to the caller unchanged

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::endpoint::BaseEndpoint;
use crate::client::error::{ApiError, ClientError};
use crate::client::request::{InboundResponse, OutboundRequest};
use crate::config::ClientConfig;
use crate::host::{derive_credential_header, CredentialState, HostRuntimeAccessor};
use crate::observability::metrics;

/// Authenticated pass-through to the backend REST surface.
#[derive(Clone)]
pub struct RequestClient {
    http: Client,
    base: BaseEndpoint,
    host: Arc<dyn HostRuntimeAccessor>,
}

impl RequestClient {
    /// One-time setup.
    ///
    /// Fails, with an error log, when `base_endpoint` is missing or not an
    /// absolute http(s) URL.
    pub fn configure(
        base_endpoint: Option<&str>,
        host: Arc<dyn HostRuntimeAccessor>,
    ) -> Result<Self, ClientError> {
        let base = match base_endpoint.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => BaseEndpoint::parse(raw).map_err(|e| {
                tracing::error!(base_endpoint = raw, error = %e, "Refusing to configure request client");
                e
            })?,
            None => {
                tracing::error!("Base endpoint is not configured; requests would be misrouted");
                return Err(ClientError::MissingBaseEndpoint);
            }
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = Client::builder().default_headers(headers).build()?;

        tracing::info!(base_endpoint = %base, "Request client configured");

        Ok(Self { http, base, host })
    }

    pub fn from_config(
        config: &ClientConfig,
        host: Arc<dyn HostRuntimeAccessor>,
    ) -> Result<Self, ClientError> {
        Self::configure(config.api.base_endpoint.as_deref(), host)
    }

    pub fn base_endpoint(&self) -> &BaseEndpoint {
        &self.base
    }

    /// The injected host runtime accessor.
    pub fn host(&self) -> &dyn HostRuntimeAccessor {
        self.host.as_ref()
    }

    /// Credential state as the next dispatch would see it.
    pub fn credential_state(&self) -> CredentialState {
        CredentialState::observe(self.host.as_ref())
    }

    /// Issue one HTTP call to `base_endpoint + path`.
    pub async fn dispatch(&self, request: OutboundRequest) -> Result<InboundResponse, ApiError> {
        let method = request.method().clone();
        let path = request.path().to_string();
        let url = self.base.url_for(&path);

        let mut builder = self.http.request(method.clone(), &url);
        if !request.params().is_empty() {
            builder = builder.query(request.params());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let authorization = derive_credential_header(self.host.as_ref());
        let authenticated = authorization.is_some();
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }

        tracing::debug!(method = %method, path = %path, authenticated, "Dispatching request");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(source) => {
                tracing::warn!(method = %method, path = %path, error = %source, "Request failed before a response");
                metrics::record_failure(&method, "transport");
                return Err(ApiError::Transport { method, path, source });
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => {
                metrics::record_failure(&method, "transport");
                return Err(ApiError::Transport { method, path, source });
            }
        };

        metrics::record_request(&method, status);

        if !status.is_success() {
            tracing::warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                authenticated,
                "Backend returned error status"
            );
            let kind = if status.is_server_error() { "backend" } else { "rejected" };
            metrics::record_failure(&method, kind);
            return Err(ApiError::Status { method, path, status, body });
        }

        Ok(InboundResponse::new(method, path, status, body))
    }

    /// Dispatch and decode a JSON body.
    pub async fn fetch<T: DeserializeOwned>(&self, request: OutboundRequest) -> Result<T, ApiError> {
        self.dispatch(request).await?.json()
    }
}
