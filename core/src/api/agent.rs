//! Agent endpoints.

use crate::client::NomadClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::models::{AgentSelf, JoinResult, Member};
use crate::route::{Operation, ResultKind};

pub(crate) const SELF: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/agent/self",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const MEMBERS: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/agent/members",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const SERVERS: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/agent/servers",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const JOIN: Operation = Operation {
    method: HttpMethod::Put,
    template: "/v1/agent/join",
    query: &["address"],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const FORCE_LEAVE: Operation = Operation {
    method: HttpMethod::Put,
    template: "/v1/agent/force-leave",
    query: &["node"],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

/// Handle for the `/v1/agent` endpoints.
pub struct AgentApi<'a> {
    client: &'a NomadClient,
}

impl<'a> AgentApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// The agent's own configuration, gossip membership, and stats.
    pub fn self_info(&self) -> Result<AgentSelf, ApiError> {
        self.client.execute(&SELF, &[], &[])
    }

    /// Gossip-pool members as seen by this agent.
    pub fn members(&self) -> Result<Vec<Member>, ApiError> {
        self.client.execute(&MEMBERS, &[], &[])
    }

    /// Known server addresses.
    pub fn servers(&self) -> Result<Vec<String>, ApiError> {
        self.client.execute(&SERVERS, &[], &[])
    }

    /// Ask the agent to join the cluster member at `address`.
    pub fn join(&self, address: &str) -> Result<JoinResult, ApiError> {
        self.client.execute(&JOIN, &[], &[("address", address)])
    }

    /// Force-remove a failed member from the gossip pool. The agent answers
    /// with an empty body.
    pub fn force_leave(&self, node: &str) -> Result<(), ApiError> {
        self.client.execute_unit(&FORCE_LEAVE, &[], &[("node", node)])
    }
}
