use crate::domain::message::Message;
use crate::storage::records::MessageRecord;
use sqlx::PgConnection;

#[derive(Clone, Debug, Default)]
pub struct MessageRepository {}

impl MessageRepository {
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Inserts a message and returns it with its generated `id` and `created_at`.
    ///
    /// # Errors
    /// Returns `sqlx::Error` if the insert fails.
    #[tracing::instrument(level = "debug", skip(self, conn, content))]
    pub(crate) async fn create(&self, conn: &mut PgConnection, content: &str) -> Result<Message, sqlx::Error> {
        let record = sqlx::query_as::<_, MessageRecord>(
            r#"
            INSERT INTO messages (content)
            VALUES ($1)
            RETURNING id, content, created_at
            "#,
        )
        .bind(content)
        .fetch_one(conn)
        .await?;

        Ok(record.into())
    }

    /// Fetches the most recent messages, newest first.
    ///
    /// # Errors
    /// Returns `sqlx::Error` if the query fails.
    #[tracing::instrument(level = "debug", skip(self, conn))]
    pub(crate) async fn fetch_recent(&self, conn: &mut PgConnection, limit: i64) -> Result<Vec<Message>, sqlx::Error> {
        let records = sqlx::query_as::<_, MessageRecord>(
            r#"
            SELECT id, content, created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(conn)
        .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
