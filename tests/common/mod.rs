//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;

use roommate_client::host::{HostRuntimeAccessor, HostSlot, NoHost, StaticHostRuntime};
use roommate_client::RequestClient;

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub uri: String,
    pub authorization: Vec<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn path(&self) -> &str {
        self.uri.split('?').next().unwrap_or_default()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub struct MockBackend {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    pub fn url(&self, prefix: &str) -> String {
        format!("http://{}{}", self.addr, prefix)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a programmable backend on a free port. `respond` maps each request
/// to a status and JSON body.
pub async fn start_backend<F>(respond: F) -> MockBackend
where
    F: Fn(&Recorded) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let respond = Arc::new(respond);

    let log = requests.clone();
    let app = Router::new().fallback(move |method: Method, uri: Uri, headers: HeaderMap, body: String| {
        let log = log.clone();
        let respond = respond.clone();
        async move {
            let recorded = Recorded {
                method: method.to_string(),
                uri: uri.to_string(),
                authorization: headers
                    .get_all(AUTHORIZATION)
                    .iter()
                    .filter_map(|v| v.to_str().ok().map(str::to_string))
                    .collect(),
                content_type: headers
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body,
            };
            let (status, body) = respond(&recorded);
            log.lock().unwrap().push(recorded);
            (
                StatusCode::from_u16(status).unwrap(),
                [(CONTENT_TYPE, "application/json")],
                body,
            )
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockBackend { addr, requests }
}

/// Backend that answers every request the same way.
pub async fn start_fixed_backend(status: u16, body: &'static str) -> MockBackend {
    start_backend(move |_| (status, body.to_string())).await
}

/// Client against `base` with no host runtime.
pub fn unhosted_client(base: &str) -> RequestClient {
    RequestClient::configure(Some(base), Arc::new(NoHost)).unwrap()
}

/// Client against `base` hosted by a recording runtime.
pub fn hosted_client(base: &str, runtime: StaticHostRuntime) -> (RequestClient, Arc<StaticHostRuntime>) {
    let runtime = Arc::new(runtime);
    let slot = HostSlot::with_runtime(runtime.clone());
    let accessor: Arc<dyn HostRuntimeAccessor> = Arc::new(slot);
    (RequestClient::configure(Some(base), accessor).unwrap(), runtime)
}

pub const USER_ID: &str = "5f0c6f9e-8a51-4c39-9a8e-0e7f3c0b9d11";
pub const OTHER_ID: &str = "0b8c3a52-6f4e-4d0a-9a51-7c2e1f4b8d22";
pub const LISTING_ID: &str = "a1e4b7c2-3d5f-4e6a-8b9c-0d1e2f3a4b5c";

pub fn profile_json() -> String {
    format!(
        r#"{{"id":"{}","telegram_id":42,"first_name":"Ada","age":27,"metro_station":"Kurskaya","search_radius":1500,"is_active":true,"created_at":"2026-01-01T00:00:00","updated_at":"2026-01-01T00:00:00"}}"#,
        USER_ID
    )
}

pub fn listings_json(title: &str) -> String {
    format!(
        r#"[{{"id":"{}","title":"{}","price":45000,"lat":55.75,"lon":37.62,"rooms":2,"is_active":true}}]"#,
        LISTING_ID, title
    )
}

pub fn candidates_json() -> String {
    format!(
        r#"[{{"id":"{}","first_name":"Grace","age":30,"distance":0.8}},{{"id":"{}","first_name":"Ada","age":27}}]"#,
        OTHER_ID, USER_ID
    )
}

/// Two matches: Grace has a username, Ada does not.
pub fn matches_json() -> String {
    format!(
        r#"[{{"id":"{}","user":{{"id":"{}","username":"grace_h","first_name":"Grace","age":30}},"created_at":"2026-01-02T10:00:00"}},{{"id":"{}","user":{{"id":"{}","first_name":"Ada","last_name":"Lovelace","age":27,"metro_station":"Kurskaya","bio":"Quiet, tidy"}}}}]"#,
        LISTING_ID, OTHER_ID, LISTING_ID, USER_ID
    )
}
