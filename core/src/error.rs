//! Error types for the orchestrator API client.
//!
//! # Design
//! Construction problems (`MissingPathParam`, `UnexpectedParam`) get their
//! own variants because they are caller bugs that fail before any network
//! I/O, while `HttpError` carries the raw status and body so callers can
//! distinguish not-found from conflict themselves — the client never
//! interprets status codes. Decode failures are kept separate from HTTP
//! failures: the former signal a contract mismatch with the server, the
//! latter an application-level refusal.

use std::fmt;

/// Errors returned by `NomadClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// A placeholder in the operation's URL template was not supplied.
    /// Raised before any network I/O.
    MissingPathParam {
        name: String,
        template: &'static str,
    },

    /// A path or query argument does not match any slot the operation
    /// declares. Raised before any network I/O.
    UnexpectedParam {
        name: String,
        template: &'static str,
    },

    /// The transport could not complete the round-trip (connection refused,
    /// timeout, DNS failure).
    Network(String),

    /// The server answered with a non-2xx status. The raw body is attached
    /// for caller inspection.
    HttpError { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The response body could not be decoded under the selected strategy
    /// (malformed JSON, truncated log stream, missing root key).
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingPathParam { name, template } => {
                write!(f, "missing path parameter `{name}` for `{template}`")
            }
            ApiError::UnexpectedParam { name, template } => {
                write!(f, "parameter `{name}` is not declared by `{template}`")
            }
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_template_for_construction_errors() {
        let err = ApiError::MissingPathParam {
            name: "job_id".to_string(),
            template: "/v1/job/{job_id}",
        };
        let msg = err.to_string();
        assert!(msg.contains("job_id"));
        assert!(msg.contains("/v1/job/{job_id}"));
    }

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 409,
            body: "conflict".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 409: conflict");
    }
}
