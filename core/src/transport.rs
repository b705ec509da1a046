//! Transport boundary: executing a built request over real HTTP.
//!
//! # Design
//! The dispatcher talks to a [`Transport`] trait so tests can substitute a
//! canned implementation and count the requests actually issued. The bundled
//! [`UreqTransport`] runs on ureq with automatic status-as-error handling
//! disabled: non-2xx responses must come back as data, because interpreting
//! status codes is the caller's job, not the transport's. Retry, timeout,
//! and TLS policy all live in the underlying agent; this layer issues
//! exactly one round-trip per `send`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip for the dispatcher.
pub trait Transport: Send + Sync {
    /// Issue `request` and return the raw response. Transport-level failures
    /// (connection refused, timeout, DNS) surface as [`ApiError::Network`].
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// The default synchronous transport, backed by a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut response = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.call()
            }
            (HttpMethod::Delete, _) => {
                let mut builder = self.agent.delete(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.call()
            }
            (HttpMethod::Post, Some(body)) => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.send_empty()
            }
            (HttpMethod::Put, Some(body)) => {
                let mut builder = self.agent.put(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Put, None) => {
                let mut builder = self.agent.put(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name, value);
                }
                builder.send_empty()
            }
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Copy response headers into owned pairs. Header values are not required
/// to be UTF-8 on the wire; invalid bytes are replaced rather than dropped
/// so callers inspecting headers still see that a value was present.
fn header_pairs(headers: &ureq::http::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ureq::http::{HeaderMap, HeaderName, HeaderValue};

    #[test]
    fn header_pairs_copies_names_and_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("application/json"),
        );
        let pairs = header_pairs(&headers);
        assert_eq!(
            pairs,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn non_utf8_header_value_is_replaced_not_dropped() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-raw"),
            HeaderValue::from_bytes(&[b'a', 0xFF, b'b']).unwrap(),
        );
        let pairs = header_pairs(&headers);
        assert_eq!(pairs[0].0, "x-raw");
        assert_eq!(pairs[0].1, "a\u{FFFD}b");
    }
}
