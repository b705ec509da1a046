//! Plain-data HTTP request and response types.
//!
//! # Design
//! These types describe HTTP traffic as plain data so that the dispatch and
//! decode layers never depend on a concrete HTTP client. `HttpRequest` values
//! are built by the dispatcher from an `Operation` plus call-time arguments;
//! `HttpResponse` values come back from whatever [`crate::transport::Transport`]
//! implementation executes the round-trip. Headers are kept as an ordered
//! multimap because servers may repeat a header, and the adaptive decoder
//! needs to inspect every `Content-Type` value it received.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed
//! across threads or stored without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built fresh for every dispatched call and never reused.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`. The body is
/// consumed by exactly one decode strategy.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True when any value of the named header contains `needle`.
    ///
    /// Header names compare case-insensitively; values are matched as given.
    pub fn header_contains(&self, name: &str, needle: &str) -> bool {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .any(|(_, v)| v.contains(needle))
    }

    /// True when the response declared a JSON body.
    pub fn is_json(&self) -> bool {
        self.header_contains("content-type", "application/json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(headers: Vec<(String, String)>) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers,
            body: String::new(),
        }
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response_with(vec![(
            "Content-Type".to_string(),
            "application/json; charset=utf-8".to_string(),
        )]);
        assert!(resp.is_json());
        assert!(resp.header_contains("CONTENT-TYPE", "charset"));
    }

    #[test]
    fn repeated_headers_are_all_inspected() {
        let resp = response_with(vec![
            ("Content-Type".to_string(), "text/plain".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]);
        assert!(resp.is_json());
    }

    #[test]
    fn missing_header_is_not_json() {
        let resp = response_with(Vec::new());
        assert!(!resp.is_json());
    }
}
