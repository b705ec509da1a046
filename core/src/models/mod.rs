//! Data-transfer types for the orchestrator API.
//!
//! # Design
//! Field names mirror the wire format's keys one-to-one via explicit serde
//! renames (the server speaks PascalCase with acronym quirks like `ID` and
//! `MemoryMB`). Every field the server may omit is an `Option` carrying
//! `skip_serializing_if`, so encoded payloads never contain nulls, and no
//! type denies unknown fields, so server-added keys never break decoding.
//! Duration-like values are `f64`: the server emits them in nanoseconds,
//! often in scientific notation (`1e+10`).

mod agent;
mod allocation;
mod evaluation;
mod job;
mod log;
mod node;

pub use agent::{AgentSelf, JoinResult, Member};
pub use allocation::{Allocation, AllocationMetrics, AllocationSummary, TaskEvent, TaskState};
pub use evaluation::Evaluation;
pub use job::{
    Constraint, Job, JobEvalResult, JobSpec, JobSummary, Network, Port, Resources, RestartPolicy,
    Service, ServiceCheck, Task, TaskGroup, UpdateStrategy,
};
pub use log::LogEvent;
pub use node::{Node, NodeEvalResult, NodeSummary};
