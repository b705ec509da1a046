//! Allocation payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::job::{Job, Resources};

/// Full allocation detail, as returned by single-allocation reads and the
/// per-node and per-job allocation listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "EvalID", skip_serializing_if = "Option::is_none")]
    pub eval_id: Option<String>,

    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "NodeID", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    /// The job definition this allocation was placed for, embedded whole.
    #[serde(rename = "Job", skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,

    #[serde(rename = "TaskGroup", skip_serializing_if = "Option::is_none")]
    pub task_group: Option<String>,

    #[serde(rename = "Resources", skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,

    #[serde(rename = "TaskResources", skip_serializing_if = "Option::is_none")]
    pub task_resources: Option<HashMap<String, Resources>>,

    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    pub metrics: Option<AllocationMetrics>,

    #[serde(rename = "DesiredStatus", skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<String>,

    #[serde(rename = "DesiredDescription", skip_serializing_if = "Option::is_none")]
    pub desired_description: Option<String>,

    #[serde(rename = "ClientStatus", skip_serializing_if = "Option::is_none")]
    pub client_status: Option<String>,

    #[serde(rename = "ClientDescription", skip_serializing_if = "Option::is_none")]
    pub client_description: Option<String>,

    #[serde(rename = "TaskStates", skip_serializing_if = "Option::is_none")]
    pub task_states: Option<HashMap<String, TaskState>>,

    #[serde(rename = "CreateIndex", skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,

    #[serde(rename = "ModifyIndex", skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

/// One row of the cluster-wide allocation listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationSummary {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "EvalID", skip_serializing_if = "Option::is_none")]
    pub eval_id: Option<String>,

    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "NodeID", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    #[serde(rename = "TaskGroup", skip_serializing_if = "Option::is_none")]
    pub task_group: Option<String>,

    #[serde(rename = "DesiredStatus", skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<String>,

    #[serde(rename = "ClientStatus", skip_serializing_if = "Option::is_none")]
    pub client_status: Option<String>,

    #[serde(rename = "CreateIndex", skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,

    #[serde(rename = "ModifyIndex", skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

/// Scheduler placement metrics attached to an allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationMetrics {
    #[serde(rename = "CoalescedFailures", skip_serializing_if = "Option::is_none")]
    pub coalesced_failures: Option<i64>,

    #[serde(rename = "AllocationTime", skip_serializing_if = "Option::is_none")]
    pub allocation_time: Option<f64>,

    #[serde(rename = "NodesEvaluated", skip_serializing_if = "Option::is_none")]
    pub nodes_evaluated: Option<i64>,

    #[serde(rename = "NodesFiltered", skip_serializing_if = "Option::is_none")]
    pub nodes_filtered: Option<i64>,

    #[serde(rename = "ClassFiltered", skip_serializing_if = "Option::is_none")]
    pub class_filtered: Option<HashMap<String, i64>>,

    #[serde(rename = "ConstraintFiltered", skip_serializing_if = "Option::is_none")]
    pub constraint_filtered: Option<HashMap<String, i64>>,

    #[serde(rename = "NodesExhausted", skip_serializing_if = "Option::is_none")]
    pub nodes_exhausted: Option<i64>,

    #[serde(rename = "ClassExhausted", skip_serializing_if = "Option::is_none")]
    pub class_exhausted: Option<HashMap<String, i64>>,

    #[serde(rename = "DimensionExhausted", skip_serializing_if = "Option::is_none")]
    pub dimension_exhausted: Option<HashMap<String, i64>>,

    #[serde(rename = "Scores", skip_serializing_if = "Option::is_none")]
    pub scores: Option<HashMap<String, f64>>,
}

/// Per-task lifecycle state within an allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskState {
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(rename = "Events", skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<TaskEvent>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskEvent {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Unix nanoseconds.
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    #[serde(rename = "ExitCode", skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,

    #[serde(rename = "Signal", skip_serializing_if = "Option::is_none")]
    pub signal: Option<i32>,

    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(rename = "KillError", skip_serializing_if = "Option::is_none")]
    pub kill_error: Option<String>,

    #[serde(rename = "DriverError", skip_serializing_if = "Option::is_none")]
    pub driver_error: Option<String>,
}
