use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::{StoreError, WaitlistStore};
use crate::models::{NewWaitlistEntry, WaitlistEntry};

const UNIQUE_VIOLATION: &str = "23505";

const ENTRY_COLUMNS: &str =
    "id, created_at, email, full_name, role, price_per_scan_cents, contacted_at";

#[derive(Clone)]
pub struct PgWaitlistStore {
    pool: PgPool,
}

impl PgWaitlistStore {
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        tracing::info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }
}

fn insert_error(err: sqlx::Error) -> StoreError {
    let duplicate = err
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION);
    if duplicate {
        StoreError::DuplicateEmail
    } else {
        StoreError::Database(err)
    }
}

#[async_trait]
impl WaitlistStore for PgWaitlistStore {
    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        let sql = format!(
            "INSERT INTO waitlist_entries (id, email, full_name, role, price_per_scan_cents, contacted_at) \
             VALUES ($1, $2, $3, $4, $5, NULL) RETURNING {ENTRY_COLUMNS}"
        );
        sqlx::query_as::<_, WaitlistEntry>(&sql)
            .bind(Uuid::new_v4())
            .bind(&entry.email)
            .bind(&entry.full_name)
            .bind(&entry.role)
            .bind(entry.price_per_scan_cents)
            .fetch_one(&self.pool)
            .await
            .map_err(insert_error)
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<WaitlistEntry>, StoreError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM waitlist_entries ORDER BY created_at DESC LIMIT $1"
        );
        let entries = sqlx::query_as::<_, WaitlistEntry>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    async fn set_contacted(
        &self,
        id: Uuid,
        contacted_at: Option<DateTime<Utc>>,
    ) -> Result<Option<WaitlistEntry>, StoreError> {
        let sql = format!(
            "UPDATE waitlist_entries SET contacted_at = $1 WHERE id = $2 RETURNING {ENTRY_COLUMNS}"
        );
        let entry = sqlx::query_as::<_, WaitlistEntry>(&sql)
            .bind(contacted_at)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(entry)
    }
}
