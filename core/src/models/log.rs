//! Log-tail records.

use serde::{Deserialize, Serialize};

/// One discrete record from the log-tailing endpoint's streamed output.
///
/// Fields the server did not send stay at their defaults. `offset` is a
/// float because the server emits large offsets in scientific notation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEvent {
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(rename = "File", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(rename = "Offset")]
    pub offset: f64,

    #[serde(rename = "FileEvent", skip_serializing_if = "Option::is_none")]
    pub file_event: Option<String>,
}
