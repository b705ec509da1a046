//! Incremental parser for the streaming log-tail wire format.
//!
//! # Design
//! The log-tail endpoints answer with a back-to-back concatenation of flat
//! JSON objects — no enclosing array, no separators — and do not label the
//! body as JSON. `serde_json`'s `StreamDeserializer` walks exactly that
//! framing in a single pass, yielding one top-level value at a time; each
//! object is folded field-by-field into a [`LogEvent`], keeping the mapping
//! of recognized keys explicit and auditable. Top-level values that are not
//! objects are skipped, and unrecognized keys inside an object are read and
//! discarded, so server-added fields never abort the stream.
//!
//! A malformed or truncated object fails the whole call: partial data is
//! never returned as if it were complete. Events come back fully
//! materialized, in the order their closing braces appeared in the stream.

use std::io::Read;

use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::models::LogEvent;

/// Decode a concatenated-JSON-object stream into an ordered event sequence.
pub(crate) fn parse<R: Read>(reader: R) -> Result<Vec<LogEvent>, ApiError> {
    let mut events = Vec::new();
    for value in serde_json::Deserializer::from_reader(reader).into_iter::<Value>() {
        let value =
            value.map_err(|e| ApiError::DeserializationError(format!("log stream: {e}")))?;
        if let Value::Object(fields) = value {
            events.push(event_from_fields(fields));
        }
    }
    Ok(events)
}

/// Map one flat object into a `LogEvent`, field by field.
fn event_from_fields(fields: Map<String, Value>) -> LogEvent {
    let mut event = LogEvent::default();
    for (name, value) in fields {
        match name.as_str() {
            "Data" => event.data = value.as_str().map(str::to_string),
            "File" => event.file = value.as_str().map(str::to_string),
            "Offset" => event.offset = value.as_f64().unwrap_or_default(),
            "FileEvent" => event.file_event = value.as_str().map(str::to_string),
            _ => {}
        }
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_concatenated_objects_in_stream_order() {
        let body = r#"{"Data":"abc","Offset":5}{"File":"f.log","FileEvent":"open"}"#;
        let events = parse(body.as_bytes()).unwrap();
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].data.as_deref(), Some("abc"));
        assert_eq!(events[0].offset, 5.0);
        assert!(events[0].file.is_none());
        assert!(events[0].file_event.is_none());

        assert_eq!(events[1].file.as_deref(), Some("f.log"));
        assert_eq!(events[1].file_event.as_deref(), Some("open"));
        assert!(events[1].data.is_none());
        assert_eq!(events[1].offset, 0.0);
    }

    #[test]
    fn truncated_object_fails_the_whole_call() {
        let err = parse(r#"{"Data":"ab"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(ref msg) if msg.contains("log stream")));
    }

    #[test]
    fn valid_prefix_before_truncation_is_not_returned() {
        let body = r#"{"Data":"complete","Offset":1}{"Data":"trunc"#;
        assert!(parse(body.as_bytes()).is_err());
    }

    #[test]
    fn unrecognized_fields_are_skipped() {
        let body = r#"{"Data":"x","AddedByServer":{"nested":[1,2]},"Offset":3}"#;
        let events = parse(body.as_bytes()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data.as_deref(), Some("x"));
        assert_eq!(events[0].offset, 3.0);
    }

    #[test]
    fn scientific_notation_offsets_parse() {
        let events = parse(r#"{"Offset":1e+10}"#.as_bytes()).unwrap();
        assert_eq!(events[0].offset, 1e10);
    }

    #[test]
    fn empty_stream_yields_no_events() {
        assert!(parse("".as_bytes()).unwrap().is_empty());
        assert!(parse("  \n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn non_object_top_level_values_are_skipped() {
        let body = r#"17 {"Data":"x"} "stray""#;
        let events = parse(body.as_bytes()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data.as_deref(), Some("x"));
    }

    #[test]
    fn whitespace_between_objects_is_tolerated() {
        let body = "{\"Offset\":1}\n{\"Offset\":2}\n";
        let events = parse(body.as_bytes()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].offset, 2.0);
    }
}
