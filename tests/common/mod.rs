#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query, State},
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use nexum_backend::{services::ai_service::AiService, store::client::StoreClient, AppState};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// In-memory stand-in for the hosted PostgREST store. Understands the query
/// shapes the gateway's `StoreClient` emits: `select`, `col=eq.v`, `or=(...)`
/// (with nested `and(...)` groups) and `order=col.{asc,desc}`.
#[derive(Clone, Default)]
pub struct FakeStore {
    tables: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    seq: Arc<AtomicU64>,
}

impl FakeStore {
    /// Insert a row directly, the way an external writer (e.g. the
    /// notification producer) would.
    pub fn seed(&self, table: &str, mut row: Value) -> Value {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();
        let obj = row.as_object_mut().expect("seed row must be an object");
        obj.insert("id".to_string(), json!(rows.len() as u64 + 1));
        obj.insert("created_at".to_string(), json!(seq));
        rows.push(row.clone());
        row
    }

    fn select(&self, table: &str, params: &[(String, String)]) -> Vec<Value> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Value> = tables.get(table).cloned().unwrap_or_default();

        for (key, value) in params {
            match key.as_str() {
                "select" => {}
                "order" => {
                    let (col, dir) = value.split_once('.').unwrap_or((value.as_str(), "asc"));
                    rows.sort_by_key(|r| sort_key(r, col));
                    if dir == "desc" {
                        rows.reverse();
                    }
                }
                "or" => rows.retain(|r| or_matches(r, value)),
                column => {
                    let expected = value.strip_prefix("eq.").unwrap_or(value);
                    rows.retain(|r| field_eq(r, column, expected));
                }
            }
        }

        rows
    }
}

fn sort_key(row: &Value, col: &str) -> i64 {
    row.get(col).and_then(|v| v.as_i64()).unwrap_or(0)
}

fn field_eq(row: &Value, column: &str, expected: &str) -> bool {
    match row.get(column) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        _ => false,
    }
}

/// `(term,term,...)` where a term is `col.eq.v` or `and(col.eq.v,...)`.
fn or_matches(row: &Value, expr: &str) -> bool {
    let inner = expr
        .strip_prefix('(')
        .and_then(|e| e.strip_suffix(')'))
        .unwrap_or(expr);

    split_top_level(inner).iter().any(|term| {
        if let Some(and_inner) = term
            .strip_prefix("and(")
            .and_then(|t| t.strip_suffix(')'))
        {
            split_top_level(and_inner)
                .iter()
                .all(|cond| cond_matches(row, cond))
        } else {
            cond_matches(row, term)
        }
    })
}

fn cond_matches(row: &Value, cond: &str) -> bool {
    match cond.splitn(3, '.').collect::<Vec<_>>().as_slice() {
        [column, "eq", expected] => field_eq(row, column, expected),
        _ => false,
    }
}

fn split_top_level(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for c in s.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

async fn insert_row(
    State(store): State<FakeStore>,
    Path(table): Path<String>,
    Json(row): Json<Value>,
) -> impl IntoResponse {
    let inserted = store.seed(&table, row);
    (StatusCode::CREATED, Json(json!([inserted])))
}

async fn select_rows(
    State(store): State<FakeStore>,
    Path(table): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    Json(store.select(&table, &params))
}

/// Bind the fake store on an ephemeral port and serve it for the rest of the
/// test. Returns the handle (for seeding) and its base URL.
pub async fn spawn_fake_store() -> (FakeStore, String) {
    let store = FakeStore::default();
    let router = Router::new()
        .route("/rest/v1/:table", get(select_rows).post(insert_row))
        .with_state(store.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (store, format!("http://{}", addr))
}

/// App state wired to the fake store. The AI endpoint points at a closed port
/// so `/ai/chat` exercises its degrade-to-fallback path.
pub async fn test_state() -> (FakeStore, AppState) {
    let (fake, base_url) = spawn_fake_store().await;
    let client = reqwest::Client::new();
    let store = StoreClient::new(base_url, "test-key".to_string(), client.clone());
    let ai_service = AiService::with_endpoint(
        "sk-test".to_string(),
        client,
        "http://127.0.0.1:9/v1/chat/completions".to_string(),
    );
    (fake, AppState::new(store, ai_service))
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
