//! Per-resource endpoint groups.
//!
//! Each module owns the `Operation` descriptors for one resource family and
//! a borrow-handle struct whose methods are one-line dispatches. Descriptors
//! are `const`s: constructed once, immutable, shared by every call.

pub(crate) mod agent;
pub(crate) mod allocations;
pub(crate) mod evaluations;
pub(crate) mod fs;
pub(crate) mod jobs;
pub(crate) mod nodes;
pub(crate) mod regions;
pub(crate) mod status;

pub use agent::AgentApi;
pub use allocations::{AllocationApi, AllocationsApi};
pub use evaluations::{EvaluationApi, EvaluationsApi};
pub use fs::FsApi;
pub use jobs::{JobApi, JobsApi};
pub use nodes::{NodeApi, NodesApi};
pub use regions::RegionsApi;
pub use status::StatusApi;
