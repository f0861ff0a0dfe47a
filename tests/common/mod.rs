//! Shared mock ledger service for integration tests.
//!
//! Implements the REST surface the client drives (accounts, signing
//! message, submission, status, faucet mint) with per-test programmable
//! state: sequence numbers, canned signing messages, failure statuses, and
//! how many polls a transaction stays pending.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU16, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Programmable state backing the mock service.
pub struct MockLedger {
    /// Sequence number reported for every account.
    pub sequence_number: Mutex<String>,
    /// Status for GET /accounts/{address} (200 default).
    pub account_status: AtomicU16,
    /// Hex (no 0x) of the canned signing message.
    pub signing_message_hex: Mutex<String>,
    /// Status for POST /transactions/signing_message (200 default).
    pub signing_status: AtomicU16,
    /// Status for POST /transactions (202 default).
    pub submit_status: AtomicU16,
    /// Hash returned on submission.
    pub submit_hash: Mutex<String>,
    /// Every transaction body received on POST /transactions.
    pub submitted: Mutex<Vec<Value>>,
    /// Polls answered 404 before the record is "indexed".
    pub not_found_polls: AtomicU32,
    /// Further polls reporting pending_transaction. u32::MAX = never settle.
    pub pending_polls: AtomicU32,
    /// Status polls observed so far.
    pub poll_count: AtomicU32,
    /// Resource returned when account_resource is hit (404 when None).
    pub resource: Mutex<Option<Value>>,
    /// Override status for the resource endpoint (0 = derive from resource).
    pub resource_status: AtomicU16,
    /// Hashes the faucet mint endpoint hands out.
    pub mint_hashes: Mutex<Vec<String>>,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self {
            sequence_number: Mutex::new("0".to_string()),
            account_status: AtomicU16::new(200),
            signing_message_hex: Mutex::new("deadbeef".to_string()),
            signing_status: AtomicU16::new(200),
            submit_status: AtomicU16::new(202),
            submit_hash: Mutex::new("0xmockhash".to_string()),
            submitted: Mutex::new(Vec::new()),
            not_found_polls: AtomicU32::new(0),
            pending_polls: AtomicU32::new(0),
            poll_count: AtomicU32::new(0),
            resource: Mutex::new(None),
            resource_status: AtomicU16::new(0),
            mint_hashes: Mutex::new(vec!["0xmint".to_string()]),
        }
    }
}

/// Start the mock service on an ephemeral port.
///
/// Returns the base URL and a handle to the programmable state.
pub async fn start_mock_ledger() -> (String, Arc<MockLedger>) {
    ledger_client::observability::logging::init();

    let state = Arc::new(MockLedger::default());

    let app = Router::new()
        .route("/", get(ledger_info))
        .route("/transactions", get(list_transactions).post(submit))
        .route("/transactions/signing_message", post(signing_message))
        .route("/transactions/{hash}", get(transaction_status))
        .route("/accounts/{address}", get(account))
        .route("/accounts/{address}/resource/{resource_type}", get(account_resource))
        .route("/accounts/{address}/resources", get(account_resources))
        .route("/accounts/{address}/modules", get(account_modules))
        .route("/mint", post(mint))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

async fn ledger_info() -> Json<Value> {
    Json(json!({ "chain_id": 4, "ledger_version": "1000" }))
}

async fn list_transactions() -> Json<Value> {
    Json(json!([]))
}

async fn account(
    State(state): State<Arc<MockLedger>>,
    Path(_address): Path<String>,
) -> Response {
    let status = state.account_status.load(Ordering::SeqCst);
    if status != 200 {
        return with_status(status, json!({ "code": status, "message": "account error" }));
    }
    let sequence_number = state.sequence_number.lock().unwrap().clone();
    Json(json!({
        "sequence_number": sequence_number,
        "authentication_key": "0x00",
    }))
    .into_response()
}

async fn account_resource(
    State(state): State<Arc<MockLedger>>,
    Path((_address, _resource_type)): Path<(String, String)>,
) -> Response {
    let forced = state.resource_status.load(Ordering::SeqCst);
    if forced != 0 && forced != 200 {
        return with_status(forced, json!({ "code": forced, "message": "resource error" }));
    }
    match state.resource.lock().unwrap().clone() {
        Some(resource) => Json(resource).into_response(),
        None => with_status(404, json!({ "code": 404, "message": "resource not found" })),
    }
}

async fn account_resources(State(state): State<Arc<MockLedger>>) -> Json<Value> {
    match state.resource.lock().unwrap().clone() {
        Some(resource) => Json(json!([resource])),
        None => Json(json!([])),
    }
}

async fn account_modules() -> Json<Value> {
    Json(json!([]))
}

async fn signing_message(
    State(state): State<Arc<MockLedger>>,
    Json(_unsigned): Json<Value>,
) -> Response {
    let status = state.signing_status.load(Ordering::SeqCst);
    if status != 200 {
        return with_status(status, json!({ "code": status, "message": "signing error" }));
    }
    let hex = state.signing_message_hex.lock().unwrap().clone();
    Json(json!({ "message": format!("0x{}", hex) })).into_response()
}

async fn submit(
    State(state): State<Arc<MockLedger>>,
    Json(signed): Json<Value>,
) -> Response {
    let status = state.submit_status.load(Ordering::SeqCst);
    if status != 202 {
        return with_status(status, json!({ "code": status, "message": "submit rejected" }));
    }
    state.submitted.lock().unwrap().push(signed);
    let hash = state.submit_hash.lock().unwrap().clone();
    with_status(202, json!({ "hash": hash }))
}

async fn transaction_status(
    State(state): State<Arc<MockLedger>>,
    Path(hash): Path<String>,
) -> Response {
    let seen = state.poll_count.fetch_add(1, Ordering::SeqCst);
    let not_found = state.not_found_polls.load(Ordering::SeqCst);
    let pending = state.pending_polls.load(Ordering::SeqCst);

    if seen < not_found {
        return with_status(404, json!({ "code": 404, "message": "not indexed" }));
    }
    if pending == u32::MAX || seen < not_found + pending {
        return Json(json!({ "type": "pending_transaction", "hash": hash })).into_response();
    }
    Json(json!({ "type": "user_transaction", "hash": hash, "success": true })).into_response()
}

async fn mint(State(state): State<Arc<MockLedger>>) -> Json<Value> {
    let hashes = state.mint_hashes.lock().unwrap().clone();
    Json(json!(hashes))
}

fn with_status(status: u16, body: Value) -> Response {
    (StatusCode::from_u16(status).unwrap(), Json(body)).into_response()
}
