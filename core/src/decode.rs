//! Adaptive response decoding: strategy selection by declared content type.
//!
//! # Design
//! The declared result type alone cannot tell "the server forgot to label
//! this body as JSON" apart from "the server really sent JSON", so the
//! decode strategy is chosen at runtime from the response's `Content-Type`
//! values, with the operation's declared result kind breaking the tie once
//! the labeled-JSON path is ruled out. The strategies form a closed set —
//! one enum variant, one handler arm:
//!
//! - `StructuredJson`: any `Content-Type` value contains `application/json`;
//!   single-document serde decode through the root-unwrapping codec.
//! - `LogStream`: the body is unlabeled and the operation expects log
//!   events; hand the raw bytes to the incremental log parser.
//! - `RawFallback`: the body is unlabeled and the operation expects a
//!   structured result; attempt a plain JSON parse anyway so a mislabeled
//!   response still decodes. Failures name the missing label.
//!
//! A missing `Content-Type` header is treated as unlabeled.

use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::log_stream;
use crate::models::LogEvent;
use crate::route::{Operation, ResultKind};

/// The closed set of response-decoding strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecodeStrategy {
    StructuredJson,
    LogStream,
    RawFallback,
}

/// Pick the strategy for a response, given the operation's declared result
/// kind.
pub(crate) fn select(response: &HttpResponse, kind: ResultKind) -> DecodeStrategy {
    if response.is_json() {
        DecodeStrategy::StructuredJson
    } else if kind == ResultKind::LogEvents {
        DecodeStrategy::LogStream
    } else {
        DecodeStrategy::RawFallback
    }
}

/// Decode a structured (non-log) operation's response body.
pub(crate) fn structured<T: DeserializeOwned>(
    op: &Operation,
    response: &HttpResponse,
) -> Result<T, ApiError> {
    match select(response, op.kind) {
        DecodeStrategy::StructuredJson => codec::decode(op.result_root, &response.body),
        DecodeStrategy::LogStream => Err(ApiError::DeserializationError(
            "log-stream body received for a structured result".to_string(),
        )),
        DecodeStrategy::RawFallback => {
            codec::decode(op.result_root, &response.body).map_err(|e| {
                ApiError::DeserializationError(format!(
                    "body not labeled application/json and raw decode failed: {e}"
                ))
            })
        }
    }
}

/// Decode a log-tail operation's response body.
///
/// A server that labels the body as JSON gets the structured path (a plain
/// array of events); the usual unlabeled concatenation goes through the
/// incremental parser.
pub(crate) fn log_events(
    op: &Operation,
    response: &HttpResponse,
) -> Result<Vec<LogEvent>, ApiError> {
    match select(response, op.kind) {
        DecodeStrategy::StructuredJson => codec::decode(op.result_root, &response.body),
        DecodeStrategy::LogStream | DecodeStrategy::RawFallback => {
            log_stream::parse(response.body.as_bytes())
        }
    }
}
