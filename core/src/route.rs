//! Route descriptors: the declarative mapping from a client operation to an
//! HTTP request shape.
//!
//! # Design
//! The source of truth for every operation is a single `const Operation`
//! owned by its endpoint-group module: verb, URL template with `{name}`
//! placeholders, the query parameters the operation accepts, the root keys
//! the serialization policy applies, and how the result decodes. `resolve`
//! turns a descriptor plus call-time arguments into a concrete URL, failing
//! fast — before any network I/O — when an argument set does not match the
//! template exactly.
//!
//! Path and query values are composed by simple concatenation and are
//! assumed URL-safe; orchestrator identifiers and region names are.

use crate::error::ApiError;
use crate::http::HttpMethod;

/// How an operation's response body decodes when the server does not label
/// it `application/json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// Plain serde target; unlabeled bodies get a best-effort JSON parse.
    Structured,
    /// Sequence of log events in the streaming tail framing.
    LogEvents,
}

/// Immutable declaration of one client operation.
///
/// Constructed once as a `const` per operation and shared read-only by every
/// call; safe for unsynchronized concurrent access.
#[derive(Debug)]
pub struct Operation {
    pub method: HttpMethod,
    /// URL path template, e.g. `/v1/job/{job_id}/allocations`.
    pub template: &'static str,
    /// Query parameter names the operation accepts.
    pub query: &'static [&'static str],
    /// Root key to unwrap from the response body, when the wire format nests
    /// the payload under its type name.
    pub result_root: Option<&'static str>,
    /// Root key to wrap the request body under before transmission.
    pub body_root: Option<&'static str>,
    pub kind: ResultKind,
}

/// Substitute path arguments into `op.template` and append query arguments,
/// producing a full URL rooted at `base_url`.
///
/// Every `{name}` placeholder must be supplied exactly once and every
/// supplied argument must correspond to a placeholder or a declared query
/// parameter; anything else is a construction error. Query arguments with
/// empty values are omitted. A template with an unclosed brace is a defect
/// in the operation catalog and panics in debug builds.
pub(crate) fn resolve(
    op: &Operation,
    base_url: &str,
    path_args: &[(&str, &str)],
    query_args: &[(&str, &str)],
) -> Result<String, ApiError> {
    let mut url = String::with_capacity(base_url.len() + op.template.len());
    url.push_str(base_url);

    let mut used = vec![false; path_args.len()];
    let mut rest = op.template;
    while let Some(open) = rest.find('{') {
        url.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = match after.find('}') {
            Some(close) => close,
            None => {
                // Templates are consts; an unclosed brace is a defect in
                // the operation catalog, not a caller error.
                debug_assert!(false, "unclosed '{{' in route template {}", op.template);
                return Err(ApiError::MissingPathParam {
                    name: after.to_string(),
                    template: op.template,
                });
            }
        };
        let name = &after[..close];
        let position = path_args.iter().position(|(k, _)| *k == name);
        match position {
            Some(i) => {
                url.push_str(path_args[i].1);
                used[i] = true;
            }
            None => {
                return Err(ApiError::MissingPathParam {
                    name: name.to_string(),
                    template: op.template,
                })
            }
        }
        rest = &after[close + 1..];
    }
    url.push_str(rest);

    if let Some(i) = used.iter().position(|u| !u) {
        return Err(ApiError::UnexpectedParam {
            name: path_args[i].0.to_string(),
            template: op.template,
        });
    }

    let mut separator = '?';
    for (name, value) in query_args {
        if !op.query.contains(name) {
            return Err(ApiError::UnexpectedParam {
                name: name.to_string(),
                template: op.template,
            });
        }
        if value.is_empty() {
            continue;
        }
        url.push(separator);
        url.push_str(name);
        url.push('=');
        url.push_str(value);
        separator = '&';
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAIL: Operation = Operation {
        method: HttpMethod::Get,
        template: "/v1/client/fs/logs/{alloc_id}",
        query: &["task", "type"],
        result_root: None,
        body_root: None,
        kind: ResultKind::LogEvents,
    };

    const INFO: Operation = Operation {
        method: HttpMethod::Get,
        template: "/v1/job/{job_id}/allocations",
        query: &[],
        result_root: None,
        body_root: None,
        kind: ResultKind::Structured,
    };

    #[test]
    fn substitutes_every_placeholder() {
        let url = resolve(&INFO, "http://a:4646", &[("job_id", "example")], &[]).unwrap();
        assert_eq!(url, "http://a:4646/v1/job/example/allocations");
    }

    #[test]
    fn missing_path_arg_is_a_construction_error() {
        let err = resolve(&INFO, "http://a:4646", &[], &[]).unwrap_err();
        assert!(matches!(err, ApiError::MissingPathParam { ref name, .. } if name == "job_id"));
    }

    #[test]
    fn extra_path_arg_is_a_construction_error() {
        let err = resolve(
            &INFO,
            "http://a:4646",
            &[("job_id", "example"), ("region", "us")],
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedParam { ref name, .. } if name == "region"));
    }

    #[test]
    fn query_args_append_in_order() {
        let url = resolve(
            &TAIL,
            "http://a:4646",
            &[("alloc_id", "203266e5")],
            &[("task", "redis"), ("type", "stdout")],
        )
        .unwrap();
        assert_eq!(
            url,
            "http://a:4646/v1/client/fs/logs/203266e5?task=redis&type=stdout"
        );
    }

    #[test]
    fn empty_query_values_are_omitted() {
        let url = resolve(
            &TAIL,
            "http://a:4646",
            &[("alloc_id", "203266e5")],
            &[("task", ""), ("type", "stderr")],
        )
        .unwrap();
        assert_eq!(url, "http://a:4646/v1/client/fs/logs/203266e5?type=stderr");
    }

    #[test]
    fn undeclared_query_name_is_a_construction_error() {
        let err = resolve(
            &TAIL,
            "http://a:4646",
            &[("alloc_id", "203266e5")],
            &[("follow", "true")],
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedParam { ref name, .. } if name == "follow"));
    }

    #[test]
    #[should_panic(expected = "unclosed '{' in route template")]
    fn unclosed_placeholder_is_a_catalog_defect() {
        const BROKEN: Operation = Operation {
            method: HttpMethod::Get,
            template: "/v1/job/{job_id",
            query: &[],
            result_root: None,
            body_root: None,
            kind: ResultKind::Structured,
        };
        let _ = resolve(&BROKEN, "http://a:4646", &[("job_id", "example")], &[]);
    }

    #[test]
    fn template_without_placeholders_passes_through() {
        const LIST: Operation = Operation {
            method: HttpMethod::Get,
            template: "/v1/jobs",
            query: &["region"],
            result_root: None,
            body_root: None,
            kind: ResultKind::Structured,
        };
        let url = resolve(&LIST, "http://a:4646", &[], &[("region", "us")]).unwrap();
        assert_eq!(url, "http://a:4646/v1/jobs?region=us");
    }
}
