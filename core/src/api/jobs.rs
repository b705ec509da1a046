//! Job endpoints: the listing/registration family and the single-job
//! family.

use crate::client::NomadClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::models::{Allocation, Evaluation, Job, JobEvalResult, JobSpec, JobSummary};
use crate::route::{Operation, ResultKind};

pub(crate) const LIST: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/jobs",
    query: &["region"],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const REGISTER: Operation = Operation {
    method: HttpMethod::Post,
    template: "/v1/jobs",
    query: &[],
    result_root: None,
    body_root: Some("JobSpec"),
    kind: ResultKind::Structured,
};

pub(crate) const INFO: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/job/{job_id}",
    query: &[],
    result_root: Some("Job"),
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const UPDATE: Operation = Operation {
    method: HttpMethod::Put,
    template: "/v1/job/{job_id}",
    query: &[],
    result_root: None,
    body_root: Some("JobSpec"),
    kind: ResultKind::Structured,
};

pub(crate) const DEREGISTER: Operation = Operation {
    method: HttpMethod::Delete,
    template: "/v1/job/{job_id}",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const JOB_ALLOCATIONS: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/job/{job_id}/allocations",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const JOB_EVALUATIONS: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/job/{job_id}/evaluations",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

pub(crate) const EVALUATE: Operation = Operation {
    method: HttpMethod::Put,
    template: "/v1/job/{job_id}/evaluate",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

/// Handle for the `/v1/jobs` endpoints.
pub struct JobsApi<'a> {
    client: &'a NomadClient,
}

impl<'a> JobsApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// All registered jobs.
    pub fn list(&self) -> Result<Vec<JobSummary>, ApiError> {
        self.client.execute(&LIST, &[], &[])
    }

    /// Jobs registered in one region.
    pub fn list_for_region(&self, region: &str) -> Result<Vec<JobSummary>, ApiError> {
        self.client.execute(&LIST, &[], &[("region", region)])
    }

    /// Register a new job; the scheduler answers with the evaluation it
    /// created.
    pub fn register(&self, spec: &JobSpec) -> Result<JobEvalResult, ApiError> {
        self.client.execute_with_body(&REGISTER, &[], &[], spec)
    }
}

/// Handle for the `/v1/job/{id}` endpoints.
pub struct JobApi<'a> {
    client: &'a NomadClient,
}

impl<'a> JobApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// The full job definition.
    pub fn info(&self, job_id: &str) -> Result<Job, ApiError> {
        self.client.execute(&INFO, &[("job_id", job_id)], &[])
    }

    /// Allocations placed for the job.
    pub fn allocations(&self, job_id: &str) -> Result<Vec<Allocation>, ApiError> {
        self.client
            .execute(&JOB_ALLOCATIONS, &[("job_id", job_id)], &[])
    }

    /// Evaluations the job has triggered.
    pub fn evaluations(&self, job_id: &str) -> Result<Vec<Evaluation>, ApiError> {
        self.client
            .execute(&JOB_EVALUATIONS, &[("job_id", job_id)], &[])
    }

    /// Force a new evaluation of the job.
    pub fn evaluate(&self, job_id: &str) -> Result<JobEvalResult, ApiError> {
        self.client.execute(&EVALUATE, &[("job_id", job_id)], &[])
    }

    /// Replace the job definition.
    pub fn update(&self, job_id: &str, spec: &JobSpec) -> Result<JobEvalResult, ApiError> {
        self.client
            .execute_with_body(&UPDATE, &[("job_id", job_id)], &[], spec)
    }

    /// Deregister the job.
    pub fn deregister(&self, job_id: &str) -> Result<JobEvalResult, ApiError> {
        self.client.execute(&DEREGISTER, &[("job_id", job_id)], &[])
    }
}
