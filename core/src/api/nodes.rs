//! Node endpoints.
//!
//! Evaluate and drain are PUTs; drain takes its switch as a query
//! parameter (`?enable=true`).

use crate::client::NomadClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::models::{Allocation, Node, NodeEvalResult, NodeSummary};
use crate::route::{Operation, ResultKind};

pub(crate) const LIST: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/nodes",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const INFO: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/node/{node_id}",
    query: &[],
    result_root: Some("Node"),
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const NODE_ALLOCATIONS: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/node/{node_id}/allocations",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const EVALUATE: Operation = Operation {
    method: HttpMethod::Put,
    template: "/v1/node/{node_id}/evaluate",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const DRAIN: Operation = Operation {
    method: HttpMethod::Put,
    template: "/v1/node/{node_id}/drain",
    query: &["enable"],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

/// Handle for the `/v1/nodes` endpoint.
pub struct NodesApi<'a> {
    client: &'a NomadClient,
}

impl<'a> NodesApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// All nodes registered with the cluster.
    pub fn list(&self) -> Result<Vec<NodeSummary>, ApiError> {
        self.client.execute(&LIST, &[], &[])
    }
}

/// Handle for the `/v1/node/{id}` endpoints.
pub struct NodeApi<'a> {
    client: &'a NomadClient,
}

impl<'a> NodeApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// Full node detail.
    pub fn info(&self, node_id: &str) -> Result<Node, ApiError> {
        self.client.execute(&INFO, &[("node_id", node_id)], &[])
    }

    /// Allocations currently placed on the node.
    pub fn allocations(&self, node_id: &str) -> Result<Vec<Allocation>, ApiError> {
        self.client
            .execute(&NODE_ALLOCATIONS, &[("node_id", node_id)], &[])
    }

    /// Force a re-evaluation of every allocation on the node.
    pub fn evaluate(&self, node_id: &str) -> Result<NodeEvalResult, ApiError> {
        self.client.execute(&EVALUATE, &[("node_id", node_id)], &[])
    }

    /// Toggle drain mode for the node.
    pub fn drain(&self, node_id: &str, enable: bool) -> Result<NodeEvalResult, ApiError> {
        let enable = if enable { "true" } else { "false" };
        self.client
            .execute(&DRAIN, &[("node_id", node_id)], &[("enable", enable)])
    }
}
