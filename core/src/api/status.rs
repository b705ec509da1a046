//! Cluster status endpoints.

use crate::client::NomadClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::route::{Operation, ResultKind};

pub(crate) const LEADER: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/status/leader",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const PEERS: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/status/peers",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

/// Handle for the `/v1/status` endpoints.
pub struct StatusApi<'a> {
    client: &'a NomadClient,
}

impl<'a> StatusApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// Address of the current cluster leader, as `host:port`.
    pub fn leader(&self) -> Result<String, ApiError> {
        self.client.execute(&LEADER, &[], &[])
    }

    /// Raft peer addresses.
    pub fn peers(&self) -> Result<Vec<String>, ApiError> {
        self.client.execute(&PEERS, &[], &[])
    }
}
