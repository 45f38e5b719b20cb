use sqlx::{Connection, PgConnection};
use std::fmt;
use std::sync::Arc;

pub mod message_repo;
pub mod records;

const SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS messages (
        id SERIAL PRIMARY KEY,
        content TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
";

/// Opens one physical connection per unit of work; nothing is pooled.
/// Every [`Database::connect`] must be paired with a [`Database::release`].
#[derive(Clone)]
pub struct Database {
    url: Arc<str>,
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

impl Database {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self { url: Arc::from(url) }
    }

    /// Opens a fresh connection.
    ///
    /// # Errors
    /// Returns `sqlx::Error` if the database is unreachable or rejects the credentials.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect(&self.url).await
    }

    /// Closes a connection obtained from [`Database::connect`].
    ///
    /// A failed graceful close is logged and swallowed; the socket is dropped either way.
    #[tracing::instrument(level = "debug", skip(self, conn))]
    pub async fn release(&self, conn: PgConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close database connection cleanly");
        }
    }
}

/// Creates the `messages` table if it does not exist yet.
///
/// # Errors
/// Returns `sqlx::Error` if the connection or the DDL statement fails.
pub async fn init_schema(db: &Database) -> Result<(), sqlx::Error> {
    let mut conn = db.connect().await?;
    let result = sqlx::query(SCHEMA).execute(&mut conn).await;
    db.release(conn).await;
    result?;

    tracing::info!("Database schema ready");
    Ok(())
}
