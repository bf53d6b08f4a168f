/// End-to-end flows over the HTTP router, backed by the in-memory store.
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use account_service::{
    db::InMemoryAccountStore, security::TokenIssuer, AppState,
};

const SECRET: &str = "test-signing-secret";

fn app() -> Router {
    let state = AppState::new(
        Arc::new(InMemoryAccountStore::new()),
        TokenIssuer::new(SECRET),
    );
    account_service::router(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    (status, value)
}

fn register_body(email: &str) -> Value {
    json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "email": email,
        "password": "pw123",
    })
}

fn login_body(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}

async fn register_and_login(app: &Router, email: &str) -> (String, String) {
    let (status, _) = send(app, "POST", "/register", None, Some(register_body(email))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app, "POST", "/login", None, Some(login_body(email, "pw123"))).await;
    assert_eq!(status, StatusCode::OK);

    (
        body["id"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn register_login_and_admin_list() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/register",
        None,
        Some(register_body("ann@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User Created Successfully");
    assert_eq!(body["result"]["email"], "ann@x.com");
    assert_eq!(body["result"]["status"], "Active");
    assert!(body["result"].get("passwordHash").is_none());

    let (status, body) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(login_body("ann@x.com", "pw123")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login Successful");
    assert_eq!(body["email"], "ann@x.com");

    let token = body["token"].as_str().unwrap();
    let claims = TokenIssuer::new(SECRET).verify(token).unwrap();
    assert_eq!(claims.email, "ann@x.com");

    let (status, body) = send(&app, "GET", "/admin-panel", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "ann@x.com");
    assert_eq!(users[0]["status"], "Active");
    assert!(users[0].get("passwordHash").is_none());
}

#[tokio::test]
async fn register_missing_fields_is_rejected() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/register",
        None,
        Some(json!({ "firstName": "Ann", "email": "ann@x.com", "password": "pw123" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was created: a follow-up login finds no account.
    let (status, _) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(login_body("ann@x.com", "pw123")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = app();

    let (status, _) = send(&app, "POST", "/register", None, Some(register_body("ann@x.com"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/register",
        None,
        Some(register_body("ANN@X.COM")),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn login_failure_modes() {
    let app = app();
    register_and_login(&app, "ann@x.com").await;

    let (status, _) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(login_body("ghost@x.com", "pw123")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(login_body("ann@x.com", "wrong")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_panel_requires_valid_token() {
    let app = app();

    let (status, _) = send(&app, "GET", "/admin-panel", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/admin-panel", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let expired = TokenIssuer::with_ttl(SECRET, chrono::Duration::hours(-2))
        .issue(uuid::Uuid::new_v4(), "ann@x.com")
        .unwrap();
    let (status, _) = send(&app, "GET", "/admin-panel", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let foreign = TokenIssuer::new("another-secret")
        .issue(uuid::Uuid::new_v4(), "ann@x.com")
        .unwrap();
    let (status, _) = send(&app, "GET", "/admin-panel", Some(&foreign), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn block_then_unlock_users() {
    let app = app();
    let (ann_id, token) = register_and_login(&app, "ann@x.com").await;
    register_and_login(&app, "bob@x.com").await;

    let (status, body) = send(
        &app,
        "POST",
        "/block-users",
        Some(&token),
        Some(json!({ "userIds": [ann_id] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Users blocked successfully");

    // Correct password, blocked account.
    let (status, body) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(login_body("ann@x.com", "pw123")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "User account is blocked");

    // The other account is untouched.
    let (status, _) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(login_body("bob@x.com", "pw123")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/unlock-users",
        Some(&token),
        Some(json!({ "userIds": [ann_id] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(login_body("ann@x.com", "pw123")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_users_is_permanent() {
    let app = app();
    let (ann_id, token) = register_and_login(&app, "ann@x.com").await;
    register_and_login(&app, "bob@x.com").await;

    let (status, body) = send(
        &app,
        "DELETE",
        "/delete-users",
        Some(&token),
        Some(json!({ "userIds": [ann_id, uuid::Uuid::new_v4()] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Users eliminated successfully");

    let (status, _) = send(
        &app,
        "POST",
        "/login",
        None,
        Some(login_body("ann@x.com", "pw123")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/admin-panel", Some(&token), None).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "bob@x.com");
}

#[tokio::test]
async fn bulk_endpoints_require_token() {
    let app = app();

    for (method, uri) in [
        ("POST", "/block-users"),
        ("POST", "/unlock-users"),
        ("DELETE", "/delete-users"),
    ] {
        let (status, _) = send(&app, method, uri, None, Some(json!({ "userIds": [] }))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn root_greeting_and_health() {
    let app = app();

    let (status, body) = send(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hey! This is your server response!");

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}
