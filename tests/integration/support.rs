//! In-memory REST backend and server helpers

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode},
    routing::{get, put},
    Json, Router,
};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub method: Method,
    pub resource: String,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct BackendState {
    tables: HashMap<String, Vec<Value>>,
    next_id: i64,
    seen: Vec<SeenRequest>,
    failing: bool,
}

/// CRUD backend keyed by resource name, recording every request
#[derive(Clone, Default)]
pub struct Backend {
    state: Arc<Mutex<BackendState>>,
}

impl Backend {
    pub fn seen(&self) -> Vec<SeenRequest> {
        self.state.lock().unwrap().seen.clone()
    }

    pub fn rows(&self, resource: &str) -> Vec<Value> {
        self.state.lock().unwrap().tables.get(resource).cloned().unwrap_or_default()
    }

    pub fn seed(&self, resource: &str, rows: Vec<Value>) {
        self.state.lock().unwrap().tables.insert(resource.to_string(), rows);
    }

    /// Make every following request answer 500
    pub fn fail_all(&self) {
        self.state.lock().unwrap().failing = true;
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/:resource", get(list).post(create))
            .route("/api/:resource/:id", put(update).delete(remove))
            .with_state(self.clone())
    }

    fn record(&self, method: Method, resource: &str, headers: &HeaderMap) -> Result<(), StatusCode> {
        let mut state = self.state.lock().unwrap();
        state.seen.push(SeenRequest {
            method,
            resource: resource.to_string(),
            authorization: headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
        if state.failing {
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            Ok(())
        }
    }
}

fn id_matches(row: &Value, id: &str) -> bool {
    match &row["id"] {
        Value::Number(n) => n.to_string() == id,
        Value::String(s) => s == id,
        _ => false,
    }
}

async fn list(
    State(backend): State<Backend>,
    Path(resource): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    backend.record(Method::GET, &resource, &headers)?;
    Ok(Json(Value::Array(backend.rows(&resource))))
}

async fn create(
    State(backend): State<Backend>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    backend.record(Method::POST, &resource, &headers)?;
    let mut state = backend.state.lock().unwrap();
    state.next_id += 1;
    body["id"] = if body["id"].is_string() {
        Value::String(format!("{}-{}", resource.to_lowercase(), state.next_id))
    } else {
        Value::from(state.next_id)
    };
    state.tables.entry(resource).or_default().push(body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn update(
    State(backend): State<Backend>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    backend.record(Method::PUT, &resource, &headers)?;
    let mut state = backend.state.lock().unwrap();
    let row = state
        .tables
        .get_mut(&resource)
        .and_then(|rows| rows.iter_mut().find(|row| id_matches(row, &id)))
        .ok_or(StatusCode::NOT_FOUND)?;
    *row = body.clone();
    Ok(Json(body))
}

async fn remove(
    State(backend): State<Backend>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    backend.record(Method::DELETE, &resource, &headers)?;
    let mut state = backend.state.lock().unwrap();
    let rows = state.tables.get_mut(&resource).ok_or(StatusCode::NOT_FOUND)?;
    let before = rows.len();
    rows.retain(|row| !id_matches(row, &id));
    if rows.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });
    format!("http://{}", addr)
}
