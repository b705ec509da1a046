use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_agent::{app, ALLOC_ID, EVAL_ID, NODE_ID};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- status / regions ---

#[tokio::test]
async fn leader_answers_host_and_port() {
    let resp = app().oneshot(get_request("/v1/status/leader")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!("127.0.0.1:4647"));
}

#[tokio::test]
async fn regions_lists_global() {
    let resp = app().oneshot(get_request("/v1/regions")).await.unwrap();
    assert_eq!(body_json(resp).await, serde_json::json!(["global"]));
}

// --- nodes ---

#[tokio::test]
async fn node_read_is_root_wrapped() {
    let resp = app()
        .oneshot(get_request(&format!("/v1/node/{NODE_ID}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["Node"]["ID"], NODE_ID);
    assert_eq!(body["Node"]["Status"], "ready");
}

#[tokio::test]
async fn unknown_node_is_404() {
    let resp = app().oneshot(get_request("/v1/node/unknown")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn drain_requires_the_enable_switch() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/node/{NODE_ID}/drain"),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/node/{NODE_ID}/drain?enable=true"),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["EvalIDs"].is_array());
}

// --- jobs ---

#[tokio::test]
async fn job_registration_round_trips_through_the_store() {
    use tower::Service;

    let mut app = app().into_service();

    // register
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/v1/jobs",
            r#"{"JobSpec":{"ID":"example","Name":"example","Type":"service","Region":"global"}}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let eval = body_json(resp).await;
    assert!(eval["EvalID"].is_string());

    // list
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/v1/jobs"))
        .await
        .unwrap();
    let rows = body_json(resp).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["ID"], "example");

    // read back root-wrapped, with spec fields merged in
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/v1/job/example"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["Job"]["ID"], "example");
    assert_eq!(body["Job"]["Region"], "global");

    // deregister, then 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("DELETE", "/v1/job/example", ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/v1/job/example"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn register_without_root_key_is_rejected() {
    let resp = app()
        .oneshot(json_request("POST", "/v1/jobs", r#"{"ID":"example"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- allocations / evaluations ---

#[tokio::test]
async fn allocation_read_is_root_wrapped() {
    let resp = app()
        .oneshot(get_request(&format!("/v1/allocation/{ALLOC_ID}")))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["Allocation"]["ID"], ALLOC_ID);
    assert_eq!(body["Allocation"]["TaskStates"]["redis"]["State"], "running");
}

#[tokio::test]
async fn evaluation_listing_is_a_bare_array() {
    let resp = app().oneshot(get_request("/v1/evaluations")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body[0]["ID"], EVAL_ID);
}

// --- agent ---

#[tokio::test]
async fn force_leave_answers_empty() {
    let resp = app()
        .oneshot(json_request("PUT", "/v1/agent/force-leave?node=x", ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.is_empty());
}

// --- client fs ---

#[tokio::test]
async fn log_tail_is_unlabeled_concatenated_json() {
    let resp = app()
        .oneshot(get_request(&format!(
            "/v1/client/fs/logs/{ALLOC_ID}?task=redis&type=stdout"
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "text/plain"
    );
    let body = body_string(resp).await;
    // No array framing, objects back to back.
    assert!(body.starts_with('{'));
    assert!(body.contains(r#"}{"Data""#));
    assert!(body.contains("redis.stdout.0"));
    assert!(body.contains("1e+2"));
}
