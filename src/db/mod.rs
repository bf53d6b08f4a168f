/// Account persistence boundary.
///
/// The service core only touches durable storage through this narrow
/// contract; the Postgres implementation lives in `postgres`, and an
/// in-memory double for tests in `memory`.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Account, AccountStatus, NewAccount};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAccountStore;
pub use postgres::PgAccountStore;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account, assigning its id and timestamps. Fails with
    /// `DuplicateEmail` when the unique-email constraint rejects it.
    async fn create(&self, account: NewAccount) -> Result<Account>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    async fn list(&self) -> Result<Vec<Account>>;

    async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<()>;

    /// Flip the status of every matching account in one atomic operation.
    /// Unmatched ids are silently ignored.
    async fn set_status_bulk(&self, ids: &[Uuid], status: AccountStatus) -> Result<()>;

    /// Permanently remove every matching account. Unmatched ids are
    /// silently ignored.
    async fn delete_bulk(&self, ids: &[Uuid]) -> Result<()>;
}
