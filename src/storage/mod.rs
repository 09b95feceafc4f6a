use anyhow::{Context as _, Result};
use chrono::Utc;
use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions, SqlitePool};
use std::{path::Path, str::FromStr};
use uuid::Uuid;

/// Default timeout for individual SQLite queries.
/// Prevents hung queries from blocking a request indefinitely.
const QUERY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Execute a future with the standard query timeout.
/// Returns an error if the operation takes longer than `QUERY_TIMEOUT`.
async fn with_timeout<T>(fut: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "database query timed out after {}s",
            QUERY_TIMEOUT.as_secs()
        )),
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub async fn new(data_dir: &Path) -> Result<Self> {
        Self::new_with_slow_query(data_dir, 0).await
    }

    /// Create storage with slow-query logging enabled.
    ///
    /// `slow_query_ms` is the threshold in milliseconds — queries exceeding it
    /// are logged at WARN level. Set to 0 to disable slow-query logging.
    pub async fn new_with_slow_query(data_dir: &Path, slow_query_ms: u64) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let db_path = data_dir.join("taskd.db");
        let mut opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .create_if_missing(true);

        if slow_query_ms > 0 {
            opts = opts.log_slow_statements(
                log::LevelFilter::Warn,
                std::time::Duration::from_millis(slow_query_ms),
            );
        }

        let pool = SqlitePool::connect_with(opts).await?;
        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    async fn migrate(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("src/storage/migrations")
            .run(pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    // ─── Tasks ──────────────────────────────────────────────────────────────

    /// All tasks, newest first. The id is a tiebreak so the order is total
    /// even when two rows share a timestamp.
    pub async fn list_tasks(&self) -> Result<Vec<TaskRow>> {
        with_timeout(async {
            Ok(
                sqlx::query_as("SELECT * FROM tasks ORDER BY created_at DESC, id DESC")
                    .fetch_all(&self.pool)
                    .await?,
            )
        })
        .await
    }

    pub async fn get_task(&self, id: &str) -> Result<Option<TaskRow>> {
        Ok(sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    pub async fn insert_task(
        &self,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<TaskRow> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO tasks (id, title, description, completed, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(title)
        .bind(description)
        .bind(completed)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        self.get_task(&id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("task not found after insert"))
    }

    /// Replace a task's fields and refresh `updated_at`. Returns `None` when
    /// no row with that id exists.
    pub async fn update_task(
        &self,
        id: &str,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<Option<TaskRow>> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, completed = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(title)
        .bind(description)
        .bind(completed)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_task(id).await
    }

    /// Hard delete. Returns `true` when a row was removed.
    pub async fn delete_task(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
