use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing required fields: firstName, lastName, email, and password are required.")]
    MissingFields,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Email not found")]
    NotFound,

    #[error("Password does not match")]
    InvalidCredentials,

    #[error("User account is blocked")]
    AccountBlocked,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingFields | AuthError::Validation(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AuthError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // The login contract reports a wrong password as a 400, not a 401.
            AuthError::InvalidCredentials => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::AccountBlocked => (StatusCode::FORBIDDEN, self.to_string()),
            AuthError::InvalidToken | AuthError::TokenExpired => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            // Duplicate email surfaces as a storage-level failure in this API.
            AuthError::DuplicateEmail => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AuthError::Database(_) | AuthError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "message": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::Database(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        }
    }
}
