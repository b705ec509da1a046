//! Synchronous typed client for a cluster-orchestrator's HTTP management
//! API.
//!
//! # Overview
//! Per-resource endpoint groups (jobs, nodes, allocations, evaluations,
//! agent, status, regions, client filesystem) are exposed as strongly-typed
//! method calls on [`NomadClient`]. Each call resolves an immutable route
//! descriptor into one HTTP request, executes it over a pluggable
//! [`Transport`], and decodes the response adaptively: bodies labeled
//! `application/json` go through the root-wrapping serde codec, while the
//! log-tailing endpoints' unlabeled streams of concatenated JSON objects go
//! through an incremental parser.
//!
//! # Design
//! - Every operation is a `const` route descriptor plus a one-line typed
//!   method; dispatch and decoding are generic and shared.
//! - Calls run synchronously end-to-end on the caller's thread; the only
//!   state shared between calls is immutable.
//! - Errors are never interpreted locally: construction problems fail
//!   before I/O, non-2xx statuses surface with their raw body, and decode
//!   failures stay distinct from HTTP failures.
//!
//! ```no_run
//! use nomad_client::NomadClient;
//!
//! let client = NomadClient::new("http://127.0.0.1:4646");
//! let jobs = client.jobs().list()?;
//! let events = client.fs().logs("203266e5-e0d6", "redis", "stdout")?;
//! # Ok::<(), nomad_client::ApiError>(())
//! ```

pub mod api;
pub mod client;
mod codec;
mod decode;
pub mod error;
pub mod http;
mod log_stream;
pub mod models;
mod route;
pub mod transport;

pub use client::NomadClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use models::{
    AgentSelf, Allocation, AllocationSummary, Evaluation, Job, JobEvalResult, JobSpec, JobSummary,
    JoinResult, LogEvent, Member, Node, NodeEvalResult, NodeSummary,
};
pub use transport::{Transport, UreqTransport};
