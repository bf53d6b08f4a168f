// Account Service Library

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod security;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AuthError, Result};

use db::AccountStore;
use security::TokenIssuer;
use services::AccountService;

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, tokens: TokenIssuer) -> Self {
        AppState {
            accounts: AccountService::new(store, tokens.clone()),
            tokens,
        }
    }
}

/// Build the application router. Administrative operations sit behind the
/// bearer-token gate; register and login are open.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/admin-panel", get(handlers::admin_panel))
        .route("/block-users", post(handlers::block_users))
        .route("/unlock-users", post(handlers::unlock_users))
        .route("/delete-users", delete(handlers::delete_users))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
