//! The client entry point and its request dispatcher.
//!
//! # Design
//! `NomadClient` holds the agent base URL and a shared [`Transport`]; all
//! per-resource endpoint groups are cheap borrow-handles over it
//! (`client.jobs().list()`). One generic dispatch path serves every
//! operation: resolve the route descriptor (construction errors fire here,
//! before any I/O), serialize the body under the serialization policy, issue
//! exactly one request over the transport, reject non-2xx statuses with the
//! raw body attached, and hand the response to the adaptive decoder. No
//! retries, no status-code interpretation, no shared mutable state between
//! calls.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{
    AgentApi, AllocationApi, AllocationsApi, EvaluationApi, EvaluationsApi, FsApi, JobApi, JobsApi,
    NodeApi, NodesApi, RegionsApi, StatusApi,
};
use crate::codec;
use crate::decode;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::models::LogEvent;
use crate::route::{self, Operation};
use crate::transport::{Transport, UreqTransport};

/// Synchronous typed client for the orchestrator's HTTP management API.
#[derive(Clone)]
pub struct NomadClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl NomadClient {
    /// Connect to an agent, e.g. `NomadClient::new("http://127.0.0.1:4646")`.
    pub fn new(agent_address: &str) -> Self {
        Self::with_transport(agent_address, UreqTransport::default())
    }

    /// Connect through a caller-supplied transport.
    pub fn with_transport(agent_address: &str, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: agent_address.trim_end_matches('/').to_string(),
            transport: Arc::new(transport),
        }
    }

    pub fn agent_address(&self) -> &str {
        &self.base_url
    }

    pub fn status(&self) -> StatusApi<'_> {
        StatusApi::new(self)
    }

    pub fn regions(&self) -> RegionsApi<'_> {
        RegionsApi::new(self)
    }

    pub fn nodes(&self) -> NodesApi<'_> {
        NodesApi::new(self)
    }

    pub fn node(&self) -> NodeApi<'_> {
        NodeApi::new(self)
    }

    pub fn jobs(&self) -> JobsApi<'_> {
        JobsApi::new(self)
    }

    pub fn job(&self) -> JobApi<'_> {
        JobApi::new(self)
    }

    pub fn allocations(&self) -> AllocationsApi<'_> {
        AllocationsApi::new(self)
    }

    pub fn allocation(&self) -> AllocationApi<'_> {
        AllocationApi::new(self)
    }

    pub fn evaluations(&self) -> EvaluationsApi<'_> {
        EvaluationsApi::new(self)
    }

    pub fn evaluation(&self) -> EvaluationApi<'_> {
        EvaluationApi::new(self)
    }

    pub fn agent(&self) -> AgentApi<'_> {
        AgentApi::new(self)
    }

    pub fn fs(&self) -> FsApi<'_> {
        FsApi::new(self)
    }

    /// Dispatch a body-less operation with a structured result.
    pub(crate) fn execute<T: DeserializeOwned>(
        &self,
        op: &Operation,
        path_args: &[(&str, &str)],
        query_args: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self.perform(op, path_args, query_args, None)?;
        decode::structured(op, &response)
    }

    /// Dispatch an operation whose request body is `body`, serialized under
    /// the operation's body root key.
    pub(crate) fn execute_with_body<T: DeserializeOwned, B: Serialize>(
        &self,
        op: &Operation,
        path_args: &[(&str, &str)],
        query_args: &[(&str, &str)],
        body: &B,
    ) -> Result<T, ApiError> {
        let encoded = codec::encode(op.body_root, body)?;
        let response = self.perform(op, path_args, query_args, Some(encoded))?;
        decode::structured(op, &response)
    }

    /// Dispatch an operation with no meaningful response payload.
    pub(crate) fn execute_unit(
        &self,
        op: &Operation,
        path_args: &[(&str, &str)],
        query_args: &[(&str, &str)],
    ) -> Result<(), ApiError> {
        self.perform(op, path_args, query_args, None).map(|_| ())
    }

    /// Dispatch a log-tail operation; the response goes to the adaptive
    /// decoder's log-event paths.
    pub(crate) fn execute_log_tail(
        &self,
        op: &Operation,
        path_args: &[(&str, &str)],
        query_args: &[(&str, &str)],
    ) -> Result<Vec<LogEvent>, ApiError> {
        let response = self.perform(op, path_args, query_args, None)?;
        decode::log_events(op, &response)
    }

    /// Build, send, and status-check one request. Route resolution runs
    /// first so construction errors never reach the transport.
    fn perform(
        &self,
        op: &Operation,
        path_args: &[(&str, &str)],
        query_args: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let url = route::resolve(op, &self.base_url, path_args, query_args)?;
        let headers = if body.is_some() {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        let request = HttpRequest {
            method: op.method,
            url,
            headers,
            body,
        };
        let response = self.transport.send(&request)?;
        if !(200..300).contains(&response.status) {
            return Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::models::{Job, JobSummary};
    use std::sync::Mutex;

    /// Transport that records every request and replays canned responses.
    struct RecordingTransport {
        requests: Mutex<Vec<HttpRequest>>,
        responses: Mutex<Vec<HttpResponse>>,
    }

    impl RecordingTransport {
        fn new(responses: Vec<HttpResponse>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                responses: Mutex::new(responses),
            }
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| ApiError::Network("no canned response".to_string()))
        }
    }

    fn json_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    fn client_with(responses: Vec<HttpResponse>) -> (NomadClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new(responses));
        let client = NomadClient {
            base_url: "http://127.0.0.1:4646".to_string(),
            transport: transport.clone(),
        };
        (client, transport)
    }

    #[test]
    fn one_request_per_call_with_substituted_url() {
        let (client, transport) = client_with(vec![json_response(200, r#"{"Job":{"ID":"x"}}"#)]);
        let job: Job = client.job().info("x").unwrap();
        assert_eq!(job.id, "x");

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].url, "http://127.0.0.1:4646/v1/job/x");
        assert!(requests[0].body.is_none());
    }

    #[test]
    fn non_success_status_surfaces_status_and_body() {
        let (client, _) = client_with(vec![HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: "job not found".to_string(),
        }]);
        let err = client.job().info("missing").unwrap_err();
        assert!(
            matches!(err, ApiError::HttpError { status: 404, ref body } if body == "job not found")
        );
    }

    #[test]
    fn construction_error_issues_zero_requests() {
        let (client, transport) = client_with(vec![json_response(200, "[]")]);
        let err = client
            .execute::<Vec<JobSummary>>(&crate::api::jobs::JOB_ALLOCATIONS, &[], &[])
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingPathParam { .. }));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn body_operations_send_wrapped_json() {
        let (client, transport) = client_with(vec![json_response(
            200,
            r#"{"EvalID":"d092fdc0","EvalCreateIndex":35,"JobModifyIndex":34}"#,
        )]);
        let spec = crate::models::JobSpec {
            id: Some("example".to_string()),
            ..Default::default()
        };
        let result = client.jobs().register(&spec).unwrap();
        assert_eq!(result.eval_id, "d092fdc0");

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["JobSpec"]["ID"], "example");
        assert_eq!(
            requests[0].headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = NomadClient::new("http://127.0.0.1:4646/");
        assert_eq!(client.agent_address(), "http://127.0.0.1:4646");
    }

    #[test]
    fn network_failure_propagates() {
        let (client, _) = client_with(Vec::new());
        let err = client.regions().list().unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
