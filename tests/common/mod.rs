//! Mock clinic backend for integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "test-admin-token";

/// What a logged-in `GET /admin/me` answers with
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum MeReply {
    #[default]
    Admin,
    /// 200 with an HTML page instead of JSON
    NotJson,
    /// 200 with `{"user": null}`
    NullUser,
}

#[derive(Clone)]
pub struct MockBackend {
    pub appointments: Arc<Mutex<Vec<Value>>>,
    pub doctors: Vec<Value>,
    pub fail_appointments: bool,
    pub fail_doctors: bool,
    pub me_reply: MeReply,
    /// Confirm updates with a bare 200 and no body
    pub bare_update_reply: bool,
    /// (id, body) of every accepted update
    pub updates: Arc<Mutex<Vec<(String, Value)>>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            appointments: Arc::new(Mutex::new(vec![
                json!({
                    "_id": "1",
                    "firstName": "Jane",
                    "lastName": "Roe",
                    "email": "jane@example.com",
                    "appointment_date": "2024-05-01T10:30:00.000Z",
                    "department": "Cardiology",
                    "docter": { "firstName": "Greg", "lastName": "House" },
                    "status": "Pending",
                    "hasVisited": false
                }),
                json!({
                    "_id": "2",
                    "firstName": "John",
                    "lastName": "Doe",
                    "appointment_date": "2024-05-02T09:00:00.000Z",
                    "department": "Neurology",
                    "docter": { "firstName": "Lisa", "lastName": "Cuddy" },
                    "status": "Accepted",
                    "hasVisited": true
                }),
            ])),
            doctors: vec![
                json!({ "_id": "d1", "firstName": "Greg", "lastName": "House", "role": "Doctor" }),
                json!({ "_id": "d2", "firstName": "Lisa", "lastName": "Cuddy", "role": "Doctor" }),
                json!({ "_id": "d3", "firstName": "James", "lastName": "Wilson", "role": "Doctor" }),
            ],
            fail_appointments: false,
            fail_doctors: false,
            me_reply: MeReply::Admin,
            bare_update_reply: false,
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("adminToken={}", TOKEN);
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .any(|pair| pair.trim() == expected)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "Admin is not authenticated!" })),
    )
        .into_response()
}

async fn me(State(backend): State<MockBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    match backend.me_reply {
        MeReply::Admin => Json(json!({
            "success": true,
            "user": { "_id": "u1", "firstName": "A", "lastName": "B", "role": "Admin" }
        }))
        .into_response(),
        MeReply::NotJson => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            "<html>maintenance</html>",
        )
            .into_response(),
        MeReply::NullUser => Json(json!({ "success": true, "user": null })).into_response(),
    }
}

async fn appointments(State(backend): State<MockBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if backend.fail_appointments {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "database down" })),
        )
            .into_response();
    }
    let list = backend.appointments.lock().unwrap().clone();
    Json(json!({ "success": true, "appointments": list })).into_response()
}

async fn doctors(State(backend): State<MockBackend>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if backend.fail_doctors {
        return (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable").into_response();
    }
    Json(json!({ "success": true, "docters": backend.doctors })).into_response()
}

async fn update(
    State(backend): State<MockBackend>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id == "locked" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "Invalid status" })),
        )
            .into_response();
    }

    let mut list = backend.appointments.lock().unwrap();
    let Some(record) = list.iter_mut().find(|a| a["_id"] == id.as_str()) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Appointment not found!" })),
        )
            .into_response();
    };
    record["status"] = body["status"].clone();
    backend.updates.lock().unwrap().push((id, body));

    if backend.bare_update_reply {
        return StatusCode::OK.into_response();
    }
    Json(json!({ "success": true, "message": "Status Updated" })).into_response()
}

pub fn router(backend: MockBackend) -> Router {
    Router::new()
        .route("/api/v1/user/admin/me", get(me))
        .route("/api/v1/appointment/getall", get(appointments))
        .route("/api/v1/user/docters", get(doctors))
        .route("/api/v1/appointment/update/:id", put(update))
        .with_state(backend)
}

/// Serve the mock on an ephemeral port and return its origin
pub async fn spawn(backend: MockBackend) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(backend)).await.unwrap();
    });
    format!("http://{}", addr)
}

/// An origin nothing is listening on
pub async fn dead_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
