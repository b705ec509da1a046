//! Client filesystem endpoints: the log-tailing family.
//!
//! These are the only operations whose server answers with the streaming
//! concatenated-object framing instead of labeled JSON; their descriptors
//! carry `ResultKind::LogEvents` so the adaptive decoder routes the body to
//! the incremental parser.

use crate::client::NomadClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::models::LogEvent;
use crate::route::{Operation, ResultKind};

pub(crate) const LOGS: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/client/fs/logs/{alloc_id}",
    query: &["task", "type", "offset", "origin"],
    result_root: None,
    body_root: None,
    kind: ResultKind::LogEvents,
};

/// Handle for the `/v1/client/fs` endpoints.
pub struct FsApi<'a> {
    client: &'a NomadClient,
}

impl<'a> FsApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// Tail a task's log file. `log_type` is `stdout` or `stderr`. Events
    /// come back fully materialized, in stream order.
    pub fn logs(
        &self,
        alloc_id: &str,
        task: &str,
        log_type: &str,
    ) -> Result<Vec<LogEvent>, ApiError> {
        self.client.execute_log_tail(
            &LOGS,
            &[("alloc_id", alloc_id)],
            &[("task", task), ("type", log_type)],
        )
    }
}
