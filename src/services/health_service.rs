use crate::storage::Database;
use opentelemetry::{KeyValue, global, metrics::Gauge};

#[derive(Clone, Debug)]
pub struct Metrics {
    pub status: Gauge<i64>,
}

impl Metrics {
    #[must_use]
    pub(crate) fn new() -> Self {
        let meter = global::meter("message-board");
        Self {
            status: meter
                .i64_gauge("health_status")
                .with_description("Status of health checks (1 for ok, 0 for error)")
                .build(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct HealthService {
    db: Database,
    metrics: Metrics,
}

impl HealthService {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db, metrics: Metrics::new() }
    }

    /// Opens a connection and runs a trivial round-trip.
    ///
    /// # Errors
    /// Returns the raw database error text, prefixed with `Database error:`.
    pub async fn check_db(&self) -> Result<(), String> {
        let result = match self.db.connect().await {
            Ok(mut conn) => {
                let ping = sqlx::query("SELECT 1").execute(&mut conn).await;
                self.db.release(conn).await;
                ping.map(|_| ())
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                self.metrics.status.record(1, &[KeyValue::new("component", "database")]);
                Ok(())
            }
            Err(e) => {
                self.metrics.status.record(0, &[KeyValue::new("component", "database")]);
                Err(format!("Database error: {e}"))
            }
        }
    }
}
