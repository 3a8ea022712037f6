//! Metro station directory.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::api::types::{MetroStation, MetroStationInfo};
use crate::client::{ApiResult, OutboundRequest, RequestClient};

/// Characters escaped in a single path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub struct MetroApi<'a> {
    client: &'a RequestClient,
}

impl<'a> MetroApi<'a> {
    pub fn new(client: &'a RequestClient) -> Self {
        Self { client }
    }

    /// Every station name.
    pub async fn stations(&self) -> ApiResult<Vec<String>> {
        self.client.fetch(OutboundRequest::get("/metro/stations")).await
    }

    /// Server-side substring search.
    pub async fn search(&self, query: &str) -> ApiResult<Vec<MetroStation>> {
        self.client
            .fetch(OutboundRequest::get("/metro/search").param("query", query))
            .await
    }

    pub async fn station(&self, name: &str) -> ApiResult<MetroStationInfo> {
        self.client.fetch(OutboundRequest::get(station_path(name))).await
    }
}

fn station_path(name: &str) -> String {
    format!("/metro/station/{}", utf8_percent_encode(name, SEGMENT))
}

/// Case-insensitive substring filter over station names, for suggestions.
///
/// An empty query returns the first `limit` names.
pub fn filter_stations<'s>(names: &'s [String], query: &str, limit: usize) -> Vec<&'s str> {
    let needle = query.trim().to_lowercase();

    names
        .iter()
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .take(limit)
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        ["Арбатская", "Смоленская", "Парк культуры", "Kurskaya"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let names = names();
        assert_eq!(filter_stations(&names, "АРБ", 10), vec!["Арбатская"]);
        assert_eq!(filter_stations(&names, "ская", 10), vec!["Арбатская", "Смоленская"]);
        assert_eq!(filter_stations(&names, "kurs", 10), vec!["Kurskaya"]);
    }

    #[test]
    fn test_empty_query_takes_first() {
        let names = names();
        assert_eq!(filter_stations(&names, "  ", 2), vec!["Арбатская", "Смоленская"]);
    }

    #[test]
    fn test_station_path_is_encoded() {
        assert!(station_path("Парк культуры").starts_with("/metro/station/%D0%9F"));
        assert_eq!(station_path("Kurskaya"), "/metro/station/Kurskaya");
        assert_eq!(station_path("A B/C"), "/metro/station/A%20B%2FC");
    }
}
