/// Account orchestration: registration, login, and administrative
/// bulk operations over the account store.
use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::db::AccountStore;
use crate::error::{AuthError, Result};
use crate::models::{
    Account, AccountStatus, AccountSummary, LoginRequest, LoginResponse, NewAccount,
    RegisterRequest,
};
use crate::security::{self, TokenIssuer};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex"));

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    tokens: TokenIssuer,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>, tokens: TokenIssuer) -> Self {
        AccountService { store, tokens }
    }

    /// Create a new account. All four required fields must be non-empty
    /// after trimming; the email is lowercased before the uniqueness check
    /// so duplicates match case-insensitively.
    pub async fn register(&self, req: RegisterRequest) -> Result<Account> {
        let first_name = req.first_name.trim().to_string();
        let last_name = req.last_name.trim().to_string();
        let email = req.email.trim().to_lowercase();

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || req.password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        if !EMAIL_RE.is_match(&email) {
            return Err(AuthError::Validation("Invalid email format".to_string()));
        }

        let password_hash = security::hash_password(&req.password)?;

        let account = self
            .store
            .create(NewAccount {
                first_name,
                last_name,
                email,
                password_hash,
                position: req.position,
                status: req.status,
            })
            .await?;

        tracing::info!("account registered: {}", account.email);
        Ok(account)
    }

    /// Authenticate and open a session. Check order is fixed: email
    /// existence, then password, then blocked status.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let email = req.email.trim().to_lowercase();

        let account = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::NotFound)?;

        if !security::verify_password(&req.password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        if account.is_blocked() {
            return Err(AuthError::AccountBlocked);
        }

        self.store
            .update_last_login(account.id, Utc::now())
            .await?;

        let token = self.tokens.issue(account.id, &account.email)?;

        tracing::info!("account logged in: {}", account.email);
        Ok(LoginResponse {
            message: "Login Successful".to_string(),
            id: account.id,
            email: account.email,
            token,
        })
    }

    /// Admin listing, projected without the password hash.
    pub async fn list_accounts(&self) -> Result<Vec<AccountSummary>> {
        let accounts = self.store.list().await?;
        Ok(accounts.into_iter().map(AccountSummary::from).collect())
    }

    /// Bulk status flip; ids that match no account are a no-op.
    pub async fn set_status(&self, ids: &[Uuid], status: AccountStatus) -> Result<()> {
        self.store.set_status_bulk(ids, status).await?;
        tracing::info!(count = ids.len(), ?status, "bulk status update");
        Ok(())
    }

    /// Bulk permanent removal; ids that match no account are a no-op.
    pub async fn delete(&self, ids: &[Uuid]) -> Result<()> {
        self.store.delete_bulk(ids).await?;
        tracing::info!(count = ids.len(), "bulk delete");
        Ok(())
    }
}
