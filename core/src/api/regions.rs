//! Region listing endpoint.

use crate::client::NomadClient;
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::route::{Operation, ResultKind};

pub(crate) const LIST: Operation = Operation {
    method: HttpMethod::Get,
    template: "/v1/regions",
    query: &[],
    result_root: None,
    body_root: None,
    kind: ResultKind::Structured,
};

/// Handle for the `/v1/regions` endpoint.
pub struct RegionsApi<'a> {
    client: &'a NomadClient,
}

impl<'a> RegionsApi<'a> {
    pub(crate) fn new(client: &'a NomadClient) -> Self {
        Self { client }
    }

    /// Names of the known regions.
    pub fn list(&self) -> Result<Vec<String>, ApiError> {
        self.client.execute(&LIST, &[], &[])
    }
}
