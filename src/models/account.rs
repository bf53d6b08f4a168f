use chrono::{DateTime, Utc};
/// Account model and wire-level request/response shapes
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_position")]
pub enum Position {
    Manager,
    Developer,
    Designer,
    QA,
    Other,
}

impl Default for Position {
    fn default() -> Self {
        Position::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_status")]
pub enum AccountStatus {
    Active,
    Blocked,
}

impl Default for AccountStatus {
    fn default() -> Self {
        AccountStatus::Active
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub position: Position,
    pub status: AccountStatus,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn is_blocked(&self) -> bool {
        self.status == AccountStatus::Blocked
    }
}

/// Validated input handed to the store by the registration flow.
/// The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub position: Position,
    pub status: AccountStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub status: AccountStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdsRequest {
    #[serde(default)]
    pub user_ids: Vec<Uuid>,
}

/// Admin listing projection: everything except the password hash and ids
/// internal to the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: Position,
    pub last_login: DateTime<Utc>,
    pub status: AccountStatus,
}

impl From<Account> for AccountSummary {
    fn from(account: Account) -> Self {
        AccountSummary {
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
            position: account.position,
            last_login: account.last_login,
            status: account.status,
        }
    }
}
