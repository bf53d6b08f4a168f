/// In-memory account store.
///
/// Test double implementing the same contract as the Postgres store,
/// including the unique-email rejection and the silent no-op on
/// unmatched ids in bulk operations.
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AuthError, Result};
use crate::models::{Account, AccountStatus, NewAccount};

use super::AccountStore;

#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AuthError::DuplicateEmail);
        }

        let now = Utc::now();
        let created = Account {
            id: Uuid::new_v4(),
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
            password_hash: account.password_hash,
            position: account.position,
            status: account.status,
            last_login: now,
            created_at: now,
            updated_at: now,
        };

        accounts.push(created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
            account.last_login = at;
            account.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn set_status_bulk(&self, ids: &[Uuid], status: AccountStatus) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        for account in accounts.iter_mut().filter(|a| ids.contains(&a.id)) {
            account.status = status;
            account.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete_bulk(&self, ids: &[Uuid]) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.retain(|a| !ids.contains(&a.id));
        Ok(())
    }
}
