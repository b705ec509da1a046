//! Evaluation payloads.

use serde::{Deserialize, Serialize};

/// A scheduler evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub eval_type: Option<String>,

    #[serde(rename = "TriggeredBy", skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,

    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    #[serde(rename = "JobModifyIndex", skip_serializing_if = "Option::is_none")]
    pub job_modify_index: Option<u64>,

    #[serde(rename = "NodeID", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    #[serde(rename = "NodeModifyIndex", skip_serializing_if = "Option::is_none")]
    pub node_modify_index: Option<u64>,

    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "StatusDescription", skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,

    /// Nanoseconds the evaluation waited before being scheduled.
    #[serde(rename = "Wait", skip_serializing_if = "Option::is_none")]
    pub wait: Option<f64>,

    #[serde(rename = "NextEval", skip_serializing_if = "Option::is_none")]
    pub next_eval: Option<String>,

    #[serde(rename = "PreviousEval", skip_serializing_if = "Option::is_none")]
    pub previous_eval: Option<String>,

    #[serde(rename = "CreateIndex", skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,

    #[serde(rename = "ModifyIndex", skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_decodes() {
        let raw = r#"{
            "ID": "d092fdc0-e1fd-2536-67d8-43af8ca798ac",
            "Priority": 50,
            "Type": "service",
            "TriggeredBy": "job-register",
            "JobID": "example",
            "JobModifyIndex": 14,
            "Status": "complete",
            "Wait": 0,
            "CreateIndex": 15,
            "ModifyIndex": 17
        }"#;
        let eval: Evaluation = serde_json::from_str(raw).unwrap();
        assert_eq!(eval.triggered_by.as_deref(), Some("job-register"));
        assert_eq!(eval.wait, Some(0.0));
        assert!(eval.node_id.is_none());
    }
}
