//! In-memory mock of the orchestrator agent's HTTP API, used by the client
//! crate's integration tests.
//!
//! Jobs are the only mutable resource: registrations land in a shared map
//! and mint evaluation IDs. Nodes, allocations, and evaluations are served
//! from fixtures matching well-known wire captures. Singular resource reads
//! answer root-wrapped (`{"Job": {...}}`); listings answer bare arrays. The
//! log-tail endpoint deliberately labels its body `text/plain` and streams
//! concatenated JSON objects, which is the server quirk the client's
//! adaptive decoder exists for.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const NODE_ID: &str = "c9972143-861d-46e6-df73-1d8287bc3e66";
pub const ALLOC_ID: &str = "203266e5-e0d6-9486-5e05-397ed2b184af";
pub const EVAL_ID: &str = "d092fdc0-e1fd-2536-67d8-43af8ca798ac";

/// Registered jobs, keyed by ID; values are the submitted specs.
pub type Db = Arc<RwLock<HashMap<String, Value>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v1/status/leader", get(status_leader))
        .route("/v1/status/peers", get(status_peers))
        .route("/v1/regions", get(regions))
        .route("/v1/nodes", get(list_nodes))
        .route("/v1/node/{id}", get(get_node))
        .route("/v1/node/{id}/allocations", get(node_allocations))
        .route("/v1/node/{id}/evaluate", put(node_evaluate))
        .route("/v1/node/{id}/drain", put(node_drain))
        .route("/v1/jobs", get(list_jobs).post(register_job))
        .route(
            "/v1/job/{id}",
            get(get_job).put(update_job).delete(deregister_job),
        )
        .route("/v1/job/{id}/allocations", get(job_allocations))
        .route("/v1/job/{id}/evaluations", get(job_evaluations))
        .route("/v1/job/{id}/evaluate", put(evaluate_job))
        .route("/v1/allocations", get(list_allocations))
        .route("/v1/allocation/{id}", get(get_allocation))
        .route("/v1/evaluations", get(list_evaluations))
        .route("/v1/evaluation/{id}", get(get_evaluation))
        .route("/v1/evaluation/{id}/allocations", get(evaluation_allocations))
        .route("/v1/agent/self", get(agent_self))
        .route("/v1/agent/members", get(agent_members))
        .route("/v1/agent/servers", get(agent_servers))
        .route("/v1/agent/join", put(agent_join))
        .route("/v1/agent/force-leave", put(agent_force_leave))
        .route("/v1/client/fs/logs/{alloc_id}", get(tail_logs))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- status / regions ---

async fn status_leader() -> Json<Value> {
    Json(json!("127.0.0.1:4647"))
}

async fn status_peers() -> Json<Value> {
    Json(json!(["127.0.0.1:4647"]))
}

async fn regions() -> Json<Value> {
    Json(json!(["global"]))
}

// --- nodes ---

fn node_fixture() -> Value {
    json!({
        "ID": NODE_ID,
        "Datacenter": "dc1",
        "Name": "mock-agent-node",
        "Attributes": {"arch": "amd64", "cpu.numcores": "2", "os.name": "linux"},
        "Resources": {"CPU": 2600, "MemoryMB": 8192, "DiskMB": 34226, "IOPS": 0},
        "Links": {},
        "Meta": {},
        "NodeClass": "",
        "Drain": false,
        "Status": "ready",
        "StatusDescription": "",
        "CreateIndex": 3,
        "ModifyIndex": 4
    })
}

async fn list_nodes() -> Json<Value> {
    json_list_of(node_fixture())
}

async fn get_node(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id != NODE_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({"Node": node_fixture()})))
}

async fn node_allocations(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id != NODE_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(json_list_of(allocation_fixture()))
}

fn eval_result() -> Json<Value> {
    Json(json!({
        "EvalIDs": [Uuid::new_v4().to_string()],
        "EvalCreateIndex": 35,
        "NodeModifyIndex": 34
    }))
}

async fn node_evaluate(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id != NODE_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(eval_result())
}

async fn node_drain(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if id != NODE_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    // The switch is required; its value does not change the canned answer.
    if !params.contains_key("enable") {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(eval_result())
}

// --- jobs ---

fn job_summary(id: &str, spec: &Value) -> Value {
    json!({
        "ID": id,
        "Name": spec.get("Name").cloned().unwrap_or_else(|| json!(id)),
        "Type": spec.get("Type").cloned().unwrap_or_else(|| json!("service")),
        "Priority": spec.get("Priority").cloned().unwrap_or_else(|| json!(50)),
        "Status": "",
        "StatusDescription": "",
        "CreateIndex": 14,
        "ModifyIndex": 14
    })
}

fn job_eval_result() -> Json<Value> {
    Json(json!({
        "EvalID": Uuid::new_v4().to_string(),
        "EvalCreateIndex": 35,
        "JobModifyIndex": 34,
        "Index": 348,
        "LastContact": 0,
        "KnownLeader": false
    }))
}

async fn list_jobs(
    State(db): State<Db>,
    Query(_params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let jobs = db.read().await;
    let rows: Vec<Value> = jobs.iter().map(|(id, spec)| job_summary(id, spec)).collect();
    Json(Value::Array(rows))
}

async fn register_job(
    State(db): State<Db>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let spec = body.get("JobSpec").cloned().ok_or(StatusCode::BAD_REQUEST)?;
    let id = spec
        .get("ID")
        .and_then(Value::as_str)
        .ok_or(StatusCode::BAD_REQUEST)?
        .to_string();
    db.write().await.insert(id, spec);
    Ok(job_eval_result())
}

async fn get_job(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let jobs = db.read().await;
    let spec = jobs.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let mut job = job_summary(&id, spec);
    for key in ["Region", "Datacenters", "Constraints", "Update", "TaskGroups", "Meta"] {
        if let Some(value) = spec.get(key) {
            job[key] = value.clone();
        }
    }
    Ok(Json(json!({"Job": job})))
}

async fn update_job(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let spec = body.get("JobSpec").cloned().ok_or(StatusCode::BAD_REQUEST)?;
    let mut jobs = db.write().await;
    if !jobs.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    jobs.insert(id, spec);
    Ok(job_eval_result())
}

async fn deregister_job(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    db.write()
        .await
        .remove(&id)
        .map(|_| job_eval_result())
        .ok_or(StatusCode::NOT_FOUND)
}

async fn job_allocations(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    if !db.read().await.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(json_list_of(allocation_fixture()))
}

async fn job_evaluations(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    if !db.read().await.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(json_list_of(evaluation_fixture()))
}

async fn evaluate_job(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    if !db.read().await.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(job_eval_result())
}

// --- allocations ---

fn allocation_fixture() -> Value {
    json!({
        "ID": ALLOC_ID,
        "EvalID": EVAL_ID,
        "Name": "example.cache[0]",
        "NodeID": NODE_ID,
        "JobID": "example",
        "TaskGroup": "cache",
        "Resources": {
            "CPU": 500,
            "MemoryMB": 256,
            "DiskMB": 0,
            "IOPS": 0,
            "Networks": [{
                "Device": "lo",
                "IP": "127.0.0.1",
                "MBits": 10,
                "DynamicPorts": [{"Label": "db", "Value": 20802}]
            }]
        },
        "Metrics": {
            "CoalescedFailures": 0,
            "AllocationTime": 1590406,
            "NodesEvaluated": 1,
            "Scores": {"binpack": 6.133651487695705}
        },
        "DesiredStatus": "run",
        "DesiredDescription": "",
        "ClientStatus": "running",
        "ClientDescription": "",
        "TaskStates": {
            "redis": {
                "State": "running",
                "Events": [{"Type": "Started", "Time": 1447806038427841000i64, "ExitCode": 0, "Signal": 0}]
            }
        },
        "CreateIndex": 7,
        "ModifyIndex": 9
    })
}

async fn list_allocations() -> Json<Value> {
    json_list_of(allocation_fixture())
}

async fn get_allocation(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id != ALLOC_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({"Allocation": allocation_fixture()})))
}

// --- evaluations ---

fn evaluation_fixture() -> Value {
    json!({
        "ID": EVAL_ID,
        "Priority": 50,
        "Type": "service",
        "TriggeredBy": "job-register",
        "JobID": "example",
        "JobModifyIndex": 14,
        "Status": "complete",
        "StatusDescription": "",
        "Wait": 0,
        "CreateIndex": 15,
        "ModifyIndex": 17
    })
}

async fn list_evaluations() -> Json<Value> {
    json_list_of(evaluation_fixture())
}

async fn get_evaluation(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id != EVAL_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({"Evaluation": evaluation_fixture()})))
}

async fn evaluation_allocations(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id != EVAL_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(json_list_of(allocation_fixture()))
}

// --- agent ---

async fn agent_self() -> Json<Value> {
    Json(json!({
        "config": {"Region": "global", "Datacenter": "dc1"},
        "member": {
            "Name": "mock-agent.global",
            "Addr": "127.0.0.1",
            "Port": 4648,
            "Status": "alive",
            "Tags": {"role": "nomad"}
        },
        "stats": {"uptime": "1h"}
    }))
}

async fn agent_members() -> Json<Value> {
    Json(json!([{
        "Name": "mock-agent.global",
        "Addr": "127.0.0.1",
        "Port": 4648,
        "Status": "alive"
    }]))
}

async fn agent_servers() -> Json<Value> {
    Json(json!(["127.0.0.1:4647"]))
}

async fn agent_join(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if !params.contains_key("address") {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Json(json!({"num_joined": 1, "error": ""})))
}

async fn agent_force_leave(
    Query(params): Query<HashMap<String, String>>,
) -> Result<StatusCode, StatusCode> {
    if !params.contains_key("node") {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(StatusCode::OK)
}

// --- client fs ---

/// Streamed log frames: concatenated JSON objects, deliberately not labeled
/// as JSON, with one offset in scientific notation.
async fn tail_logs(
    Path(alloc_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, StatusCode> {
    if alloc_id != ALLOC_ID {
        return Err(StatusCode::NOT_FOUND);
    }
    let file = format!(
        "{}.{}.0",
        params.get("task").map(String::as_str).unwrap_or("redis"),
        params.get("type").map(String::as_str).unwrap_or("stdout"),
    );
    let body = format!(
        concat!(
            r#"{{"File":"{file}","FileEvent":"file created","Offset":0}}"#,
            r#"{{"Data":"bG9nIGxpbmUgb25lCg==","File":"{file}","Offset":19}}"#,
            r#"{{"Data":"bG9nIGxpbmUgdHdvCg==","File":"{file}","Offset":1e+2}}"#,
        ),
        file = file
    );
    Ok(([(header::CONTENT_TYPE, "text/plain")], body))
}

fn json_list_of(value: Value) -> Json<Value> {
    Json(Value::Array(vec![value]))
}
