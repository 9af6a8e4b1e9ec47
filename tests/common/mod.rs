//! Shared utilities for integration testing: an in-process json-server.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use hotel_booking::config::ApiConfig;
use hotel_booking::ApiClient;

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Vec<Value>>,
    failing: HashSet<String>,
    request_ids: Vec<String>,
}

/// Handle on the mock store's data, shared with the running server.
#[derive(Clone, Default)]
pub struct MockStore {
    inner: Arc<Mutex<Inner>>,
}

impl MockStore {
    /// Replace a collection's records.
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        self.inner
            .lock()
            .unwrap()
            .collections
            .insert(collection.to_string(), records);
    }

    /// Current records of a collection.
    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.inner
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Answer 500 for every request touching `collection`.
    pub fn fail(&self, collection: &str) {
        self.inner
            .lock()
            .unwrap()
            .failing
            .insert(collection.to_string());
    }

    /// `x-request-id` values seen so far.
    pub fn request_ids(&self) -> Vec<String> {
        self.inner.lock().unwrap().request_ids.clone()
    }

    fn observe(&self, collection: &str, headers: &HeaderMap) -> Option<Response> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(id) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
            inner.request_ids.push(id.to_string());
        }
        inner.failing.contains(collection).then(|| {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))).into_response()
        })
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn id_matches(record: &Value, id: &str) -> bool {
    record.get("id").map(text).as_deref() == Some(id)
}

async fn list(
    State(store): State<MockStore>,
    Path(collection): Path<String>,
    Query(filters): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = store.observe(&collection, &headers) {
        return failure;
    }
    let records: Vec<Value> = store
        .records(&collection)
        .into_iter()
        .filter(|r| {
            filters
                .iter()
                .all(|(k, v)| r.get(k).map(text).as_deref() == Some(v.as_str()))
        })
        .collect();
    Json(records).into_response()
}

async fn create(
    State(store): State<MockStore>,
    Path(collection): Path<String>,
    headers: HeaderMap,
    Json(mut record): Json<Value>,
) -> Response {
    if let Some(failure) = store.observe(&collection, &headers) {
        return failure;
    }
    let mut inner = store.inner.lock().unwrap();
    let records = inner.collections.entry(collection).or_default();
    let next_id = records
        .iter()
        .filter_map(|r| r.get("id").and_then(Value::as_u64))
        .max()
        .unwrap_or(0)
        + 1;
    record["id"] = json!(next_id);
    records.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn fetch(
    State(store): State<MockStore>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = store.observe(&collection, &headers) {
        return failure;
    }
    match store.records(&collection).into_iter().find(|r| id_matches(r, &id)) {
        Some(record) => Json(record).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn replace(
    State(store): State<MockStore>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(mut record): Json<Value>,
) -> Response {
    if let Some(failure) = store.observe(&collection, &headers) {
        return failure;
    }
    let mut inner = store.inner.lock().unwrap();
    let records = inner.collections.entry(collection).or_default();
    match records.iter_mut().find(|r| id_matches(r, &id)) {
        Some(slot) => {
            record["id"] = slot["id"].clone();
            *slot = record.clone();
            Json(record).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn remove(
    State(store): State<MockStore>,
    Path((collection, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Some(failure) = store.observe(&collection, &headers) {
        return failure;
    }
    let mut inner = store.inner.lock().unwrap();
    let records = inner.collections.entry(collection).or_default();
    let before = records.len();
    records.retain(|r| !id_matches(r, &id));
    if records.len() == before {
        (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
    } else {
        Json(json!({})).into_response()
    }
}

/// Start a mock store on an ephemeral port and return a client pointed at it.
pub async fn start_mock_store() -> (ApiClient, MockStore) {
    let store = MockStore::default();
    let app = Router::new()
        .route("/{collection}", get(list).post(create))
        .route("/{collection}/{id}", get(fetch).put(replace).delete(remove))
        .with_state(store.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let config = ApiConfig {
        base_url: format!("http://{addr}"),
        ..ApiConfig::default()
    };
    (ApiClient::new(&config).unwrap(), store)
}

/// Check-in `days_ahead` days from today and check-out `nights` later.
pub fn stay(days_ahead: i64, nights: i64) -> (String, String) {
    let check_in = hotel_booking::views::booking::today() + chrono::Duration::days(days_ahead);
    let check_out = check_in + chrono::Duration::days(nights);
    (check_in.to_string(), check_out.to_string())
}

/// Three rooms, two guests, one admin and bookings for both guests.
pub fn seed_hotel(store: &MockStore) {
    store.seed(
        "rooms",
        vec![
            json!({"id": 1, "name": "Deluxe King", "type": "Deluxe", "price": 5500, "capacity": 2,
                   "description": "King bed", "image": "", "amenities": ["WiFi", "AC"]}),
            json!({"id": 2, "name": "Family Suite", "type": "Suite", "price": 9000, "capacity": 4,
                   "description": "Two rooms", "image": "", "amenities": ["WiFi", "Kitchen"]}),
            json!({"id": 3, "name": "Budget Twin", "type": "Standard", "price": 2500, "capacity": 2,
                   "description": "Twin beds", "image": "", "amenities": []}),
            json!({"id": 4, "name": "Penthouse", "type": "Suite", "price": 25000, "capacity": 6,
                   "description": "Top floor", "image": "", "amenities": ["Pool"]}),
        ],
    );
    store.seed(
        "users",
        vec![
            json!({"id": 1, "name": "Asha Rao", "email": "asha@example.com", "password": "asha123"}),
            json!({"id": 2, "name": "Vikram Shah", "email": "vikram@example.com", "password": "vik456"}),
        ],
    );
    store.seed(
        "admins",
        vec![json!({"id": 1, "username": "admin", "name": "Hotel Admin", "password": "admin123"})],
    );
    store.seed(
        "bookings",
        vec![
            json!({"id": 1, "roomId": 1, "userId": 1, "guestName": "Asha Rao",
                   "checkIn": "2026-11-01", "checkOut": "2026-11-03"}),
            json!({"id": 2, "roomId": 2, "userId": 2, "guestName": "Vikram Shah",
                   "checkIn": "2026-12-10", "checkOut": "2026-12-12"}),
            json!({"id": 3, "roomId": 99, "userId": 1, "guestName": "Asha Rao",
                   "checkIn": "2027-01-05", "checkOut": "2027-01-06"}),
        ],
    );
}
