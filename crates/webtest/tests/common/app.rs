//! The application under test.
//!
//! A small axum application with a public route, identity-gated routes and
//! deliberately failing routes, so the harness can be exercised against the
//! full spread of behaviors a real service shows.

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use webtest::CurrentUser;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub uid: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default)]
    pub page: u32,
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "UP" }))
}

async fn me(user: CurrentUser) -> impl IntoResponse {
    Json(json!({ "uid": user.uid() }))
}

async fn create_user(user: CurrentUser, Json(body): Json<CreateUserRequest>) -> impl IntoResponse {
    let response = UserResponse {
        id: Uuid::new_v4(),
        uid: user.uid().to_string(),
        name: body.name,
        email: body.email,
    };
    (StatusCode::CREATED, Json(response))
}

async fn update_user(
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    Json(json!({
        "id": id,
        "uid": user.uid(),
        "name": body.name,
    }))
}

async fn search(user: CurrentUser, Query(params): Query<SearchParams>) -> impl IntoResponse {
    Json(json!({
        "uid": user.uid(),
        "q": params.q,
        "page": params.page,
    }))
}

async fn echo_headers(headers: HeaderMap) -> impl IntoResponse {
    let request_id = headers.get("x-request-id").and_then(|v| v.to_str().ok());
    let uid = headers.get("x-uid").and_then(|v| v.to_str().ok());
    Json(json!({ "x-request-id": request_id, "x-uid": uid }))
}

async fn boom(_user: CurrentUser) -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": 500, "message": "simulated failure" })),
    )
}

/// Builds the application under test.
pub fn test_app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users/me", get(me))
        .route("/users", post(create_user))
        .route("/users/{id}", patch(update_user))
        .route("/search", get(search))
        .route("/headers", get(echo_headers))
        .route("/boom", get(boom))
}
