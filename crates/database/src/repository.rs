use crate::connection::{connect, release};
use crate::DbError;
use configuration::DatabaseSettings;
use sqlx::FromRow;
use std::future::Future;

/// Represents a row from the `texts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TextRecord {
    pub id: i32,
    pub content: String,
}

/// The data access contract the web layer is written against.
///
/// Every operation is a single auto-committed statement. Update and delete
/// report the affected-row count; zero rows is a successful no-op, never an
/// error.
pub trait TextStore: Send + Sync + 'static {
    /// All records, in whatever order the store returns them.
    fn list(&self) -> impl Future<Output = Result<Vec<TextRecord>, DbError>> + Send;

    /// Inserts a new record and returns the id the store assigned to it.
    fn insert(&self, content: &str) -> impl Future<Output = Result<i32, DbError>> + Send;

    fn update(&self, id: i32, content: &str) -> impl Future<Output = Result<u64, DbError>> + Send;

    fn delete(&self, id: i32) -> impl Future<Output = Result<u64, DbError>> + Send;

    /// Succeeds if the store can currently be reached.
    fn ping(&self) -> impl Future<Output = Result<(), DbError>> + Send;
}

/// The `DbRepository` encapsulates all SQL against the `texts` table.
///
/// It holds connection settings rather than a pool: each call opens its own
/// connection and releases it before returning, on success and failure alike.
#[derive(Debug, Clone)]
pub struct DbRepository {
    settings: DatabaseSettings,
}

impl DbRepository {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }
}

/// Logs a failed statement with its context and wraps it.
fn query_failed(operation: &'static str, source: sqlx::Error) -> DbError {
    tracing::error!(error = %source, operation, "Database statement failed.");
    DbError::Query { operation, source }
}

impl TextStore for DbRepository {
    async fn list(&self) -> Result<Vec<TextRecord>, DbError> {
        let mut conn = connect(&self.settings).await?;
        let result = sqlx::query_as::<_, TextRecord>("SELECT id, content FROM texts;")
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        result.map_err(|e| query_failed("fetch texts", e))
    }

    async fn insert(&self, content: &str) -> Result<i32, DbError> {
        if content.is_empty() {
            return Err(DbError::EmptyContent);
        }

        let mut conn = connect(&self.settings).await?;
        let result = sqlx::query_scalar::<_, i32>(
            "INSERT INTO texts (content) VALUES ($1) RETURNING id;",
        )
        .bind(content)
        .fetch_one(&mut conn)
        .await;
        release(conn).await;

        let id = result.map_err(|e| query_failed("add text", e))?;
        tracing::debug!(id, "Text inserted.");
        Ok(id)
    }

    async fn update(&self, id: i32, content: &str) -> Result<u64, DbError> {
        if content.is_empty() {
            return Err(DbError::EmptyContent);
        }

        let mut conn = connect(&self.settings).await?;
        let result = sqlx::query("UPDATE texts SET content = $1 WHERE id = $2;")
            .bind(content)
            .bind(id)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let done = result.map_err(|e| query_failed("update text", e))?;
        Ok(done.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let mut conn = connect(&self.settings).await?;
        let result = sqlx::query("DELETE FROM texts WHERE id = $1;")
            .bind(id)
            .execute(&mut conn)
            .await;
        release(conn).await;

        let done = result.map_err(|e| query_failed("delete text", e))?;
        Ok(done.rows_affected())
    }

    async fn ping(&self) -> Result<(), DbError> {
        let conn = connect(&self.settings).await?;
        release(conn).await;
        Ok(())
    }
}
