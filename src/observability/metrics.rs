//! Metrics collection.
//!
//! # Metrics
//! - `client_requests_total` (counter): responses received, by method and status
//! - `client_request_failures_total` (counter): failed calls, by method and kind
//! - `client_listing_fallbacks_total` (counter): curated listings replaced by
//!   the unfiltered search

use metrics::counter;
use reqwest::{Method, StatusCode};

pub fn record_request(method: &Method, status: StatusCode) {
    counter!(
        "client_requests_total",
        "method" => method.as_str().to_string(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);
}

pub fn record_failure(method: &Method, kind: &'static str) {
    counter!(
        "client_request_failures_total",
        "method" => method.as_str().to_string(),
        "kind" => kind
    )
    .increment(1);
}

pub fn record_listing_fallback() {
    counter!("client_listing_fallbacks_total").increment(1);
}
