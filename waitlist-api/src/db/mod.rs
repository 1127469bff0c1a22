mod memory;
mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{NewWaitlistEntry, WaitlistEntry};

pub use memory::MemoryWaitlistStore;
pub use postgres::PgWaitlistStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("email already on the waitlist")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for waitlist signups.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError>;

    /// Newest signups first, at most `limit` of them.
    async fn list_recent(&self, limit: u32) -> Result<Vec<WaitlistEntry>, StoreError>;

    /// Set or clear `contacted_at`. `None` when no entry has this id.
    async fn set_contacted(
        &self,
        id: Uuid,
        contacted_at: Option<DateTime<Utc>>,
    ) -> Result<Option<WaitlistEntry>, StoreError>;
}
