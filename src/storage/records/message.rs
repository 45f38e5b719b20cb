use crate::domain::message::Message;
use time::PrimitiveDateTime;

#[derive(Debug, sqlx::FromRow)]
pub struct MessageRecord {
    pub(crate) id: i32,
    pub(crate) content: String,
    pub(crate) created_at: Option<PrimitiveDateTime>,
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self { id: record.id, content: record.content, created_at: record.created_at }
    }
}
