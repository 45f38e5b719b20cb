use time::PrimitiveDateTime;

/// A posted message. Rows are only ever inserted, so `id` and `created_at` never change once assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub created_at: Option<PrimitiveDateTime>,
}
