//! Root-wrapped JSON codec: the crate-wide serialization policy.
//!
//! # Design
//! The wire convention nests a payload one level under a key equal to its
//! type's name (`{"Job": {...}}`). Wrapping and unwrapping are explicit
//! transforms around plain serde, applied only when the operation declares a
//! root key; list endpoints come back as bare arrays and skip the step.
//!
//! The rest of the policy lives on the DTOs themselves, the way serde is
//! meant to be used: absent `Option` fields carry
//! `skip_serializing_if = "Option::is_none"` so nulls are omitted on encode,
//! and no type opts into `deny_unknown_fields`, so server-added fields never
//! break decoding.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Serialize `value`, wrapping it under `root` when given.
pub(crate) fn encode<T: Serialize>(root: Option<&str>, value: &T) -> Result<String, ApiError> {
    let inner =
        serde_json::to_value(value).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    let document = match root {
        Some(key) => {
            let mut wrapper = serde_json::Map::with_capacity(1);
            wrapper.insert(key.to_string(), inner);
            Value::Object(wrapper)
        }
        None => inner,
    };
    serde_json::to_string(&document).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Deserialize `body` into `T`, unwrapping `root` first when given.
///
/// A declared-but-absent root key is a decode failure: the payload the caller
/// asked for is simply not in the document.
pub(crate) fn decode<T: DeserializeOwned>(root: Option<&str>, body: &str) -> Result<T, ApiError> {
    match root {
        None => {
            serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
        }
        Some(key) => {
            let mut document: Value = serde_json::from_str(body)
                .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
            let inner = document
                .get_mut(key)
                .map(Value::take)
                .ok_or_else(|| {
                    ApiError::DeserializationError(format!("missing root key `{key}`"))
                })?;
            serde_json::from_value(inner).map_err(|e| ApiError::DeserializationError(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
        priority: Option<i32>,
    }

    #[test]
    fn encode_wraps_under_root() {
        let payload = Payload {
            id: "x".to_string(),
            priority: Some(50),
        };
        let json = encode(Some("Job"), &payload).unwrap();
        assert_eq!(json, r#"{"Job":{"ID":"x","Priority":50}}"#);
    }

    #[test]
    fn encode_omits_absent_fields() {
        let payload = Payload {
            id: "x".to_string(),
            priority: None,
        };
        let json = encode(Some("Job"), &payload).unwrap();
        assert_eq!(json, r#"{"Job":{"ID":"x"}}"#);
    }

    #[test]
    fn decode_unwraps_root() {
        let payload: Payload = decode(Some("Job"), r#"{"Job":{"ID":"x"}}"#).unwrap();
        assert_eq!(payload.id, "x");
        assert!(payload.priority.is_none());
    }

    #[test]
    fn round_trip_is_transparent() {
        let payload = Payload {
            id: "binstore".to_string(),
            priority: Some(50),
        };
        let json = encode(Some("Job"), &payload).unwrap();
        let back: Payload = decode(Some("Job"), &json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let payload: Payload =
            decode(Some("Job"), r#"{"Job":{"ID":"x","AddedByServer":true}}"#).unwrap();
        assert_eq!(payload.id, "x");
    }

    #[test]
    fn missing_root_key_is_a_decode_error() {
        let err = decode::<Payload>(Some("Job"), r#"{"Node":{"ID":"x"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(ref msg) if msg.contains("Job")));
    }

    #[test]
    fn bare_decode_takes_the_document_as_is() {
        let payloads: Vec<Payload> = decode(None, r#"[{"ID":"a"},{"ID":"b"}]"#).unwrap();
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[1].id, "b");
    }
}
