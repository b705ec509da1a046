//! Allocation endpoints.

use crate::client::NomadClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::models::{Allocation, AllocationSummary};
use crate::route::{Operation, ResultKind};

pub(crate) const LIST: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/allocations",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const INFO: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/allocation/{alloc_id}",
    query: &[],
    result_root: Some("Allocation"),
    body_root: None,
    kind: ResultKind::Structured,
};

/// Handle for the `/v1/allocations` endpoint.
pub struct AllocationsApi<'a> {
    client: &'a NomadClient,
}

impl<'a> AllocationsApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// Every allocation known to the cluster.
    pub fn list(&self) -> Result<Vec<AllocationSummary>, ApiError> {
        self.client.execute(&LIST, &[], &[])
    }
}

/// Handle for the `/v1/allocation/{id}` endpoint.
pub struct AllocationApi<'a> {
    client: &'a NomadClient,
}

impl<'a> AllocationApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// Full allocation detail.
    pub fn info(&self, alloc_id: &str) -> Result<Allocation, ApiError> {
        self.client.execute(&INFO, &[("alloc_id", alloc_id)], &[])
    }
}
