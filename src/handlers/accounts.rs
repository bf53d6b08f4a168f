/// HTTP request handlers (REST API)
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::error::Result;
use crate::middleware::AuthClaims;
use crate::models::{AccountStatus, LoginRequest, RegisterRequest, UserIdsRequest};
use crate::AppState;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Hey! This is your server response!" }))
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let account = state.accounts.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User Created Successfully",
            "result": account,
        })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let session = state.accounts.login(payload).await?;
    Ok(Json(session))
}

pub async fn admin_panel(
    State(state): State<AppState>,
    _claims: AuthClaims,
) -> Result<impl IntoResponse> {
    let users = state.accounts.list_accounts().await?;

    Ok(Json(json!({
        "message": "Users retrieved successfully",
        "users": users,
    })))
}

pub async fn block_users(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Json(payload): Json<UserIdsRequest>,
) -> Result<impl IntoResponse> {
    state
        .accounts
        .set_status(&payload.user_ids, AccountStatus::Blocked)
        .await?;

    Ok(Json(json!({ "message": "Users blocked successfully" })))
}

pub async fn unlock_users(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Json(payload): Json<UserIdsRequest>,
) -> Result<impl IntoResponse> {
    state
        .accounts
        .set_status(&payload.user_ids, AccountStatus::Active)
        .await?;

    Ok(Json(json!({ "message": "Users unlocked successfully" })))
}

pub async fn delete_users(
    State(state): State<AppState>,
    _claims: AuthClaims,
    Json(payload): Json<UserIdsRequest>,
) -> Result<impl IntoResponse> {
    state.accounts.delete(&payload.user_ids).await?;

    Ok(Json(json!({ "message": "Users eliminated successfully" })))
}
