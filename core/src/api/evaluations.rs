//! Evaluation endpoints.

use crate::client::NomadClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::models::{AllocationSummary, Evaluation};
use crate::route::{Operation, ResultKind};

pub(crate) const LIST: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/evaluations",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const INFO: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/evaluation/{eval_id}",
    query: &[],
    result_root: Some("Evaluation"),
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const EVAL_ALLOCATIONS: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/evaluation/{eval_id}/allocations",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

/// Handle for the `/v1/evaluations` endpoint.
pub struct EvaluationsApi<'a> {
    client: &'a NomadClient,
}

impl<'a> EvaluationsApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// Every evaluation known to the cluster.
    pub fn list(&self) -> Result<Vec<Evaluation>, ApiError> {
        self.client.execute(&LIST, &[], &[])
    }
}

/// Handle for the `/v1/evaluation/{id}` endpoints.
pub struct EvaluationApi<'a> {
    client: &'a NomadClient,
}

impl<'a> EvaluationApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// Single evaluation detail.
    pub fn info(&self, eval_id: &str) -> Result<Evaluation, ApiError> {
        self.client.execute(&INFO, &[("eval_id", eval_id)], &[])
    }

    /// Allocations the evaluation produced.
    pub fn allocations(&self, eval_id: &str) -> Result<Vec<AllocationSummary>, ApiError> {
        self.client
            .execute(&EVAL_ALLOCATIONS, &[("eval_id", eval_id)], &[])
    }
}
