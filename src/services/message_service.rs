use crate::domain::message::Message;
use crate::error::Result;
use crate::storage::Database;
use crate::storage::message_repo::MessageRepository;
use opentelemetry::{KeyValue, global, metrics::Counter};

/// Maximum number of messages returned by a listing.
pub const RECENT_LIMIT: i64 = 10;

#[derive(Clone, Debug)]
pub(crate) struct Metrics {
    pub(crate) created_total: Counter<u64>,
    pub(crate) listed_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("message-board");
        Self {
            created_total: meter
                .u64_counter("messages_created_total")
                .with_description("Total create attempts, labelled by outcome")
                .build(),
            listed_total: meter
                .u64_counter("messages_listed_total")
                .with_description("Total messages returned by listings")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageService {
    db: Database,
    repo: MessageRepository,
    metrics: Metrics,
}

impl MessageService {
    #[must_use]
    pub fn new(db: Database, repo: MessageRepository) -> Self {
        Self { db, repo, metrics: Metrics::new() }
    }

    /// Stores a new message.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the connection or the insert fails.
    #[tracing::instrument(err(level = "warn"), skip(self, content), fields(content_len = content.len()))]
    pub async fn create_message(&self, content: &str) -> Result<Message> {
        let result = self.insert(content).await;

        let status = if result.is_ok() { "success" } else { "failure" };
        self.metrics.created_total.add(1, &[KeyValue::new("status", status)]);

        let message = result?;
        tracing::debug!(message_id = message.id, "Message stored");
        Ok(message)
    }

    /// Returns up to [`RECENT_LIMIT`] messages, newest first.
    ///
    /// # Errors
    /// Returns `AppError::Database` if the connection or the query fails.
    #[tracing::instrument(err(level = "warn"), skip(self))]
    pub async fn list_recent(&self) -> Result<Vec<Message>> {
        let mut conn = self.db.connect().await?;
        let result = self.repo.fetch_recent(&mut conn, RECENT_LIMIT).await;
        self.db.release(conn).await;

        let messages = result?;
        self.metrics.listed_total.add(messages.len() as u64, &[]);
        Ok(messages)
    }

    async fn insert(&self, content: &str) -> Result<Message> {
        let mut conn = self.db.connect().await?;
        let result = self.repo.create(&mut conn, content).await;
        self.db.release(conn).await;
        Ok(result?)
    }
}
