/// Postgres-backed account store
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AuthError, Result};
use crate::models::{Account, AccountStatus, NewAccount};

use super::AccountStore;

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PgAccountStore { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account> {
        let created = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts
                (id, first_name, last_name, email, password_hash, position, status,
                 last_login, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7,
                    CURRENT_TIMESTAMP, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.position)
        .bind(account.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("unique constraint") {
                AuthError::DuplicateEmail
            } else {
                AuthError::Database(e.to_string())
            }
        })?;

        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    async fn list(&self) -> Result<Vec<Account>> {
        let accounts = sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;

        Ok(accounts)
    }

    async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<()> {
        sqlx::query(
            "UPDATE accounts SET last_login = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn set_status_bulk(&self, ids: &[Uuid], status: AccountStatus) -> Result<()> {
        sqlx::query(
            "UPDATE accounts SET status = $1, updated_at = CURRENT_TIMESTAMP WHERE id = ANY($2)",
        )
        .bind(status)
        .bind(ids)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_bulk(&self, ids: &[Uuid]) -> Result<()> {
        sqlx::query("DELETE FROM accounts WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
