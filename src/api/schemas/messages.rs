use crate::domain::message::Message;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

time::serde::format_description!(
    iso_timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]"
);

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub id: i32,
    pub content: String,
    #[serde(with = "iso_timestamp::option")]
    pub created_at: Option<PrimitiveDateTime>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self { id: message.id, content: message.content, created_at: message.created_at }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
}

impl From<Vec<Message>> for MessageListResponse {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages: messages.into_iter().map(Into::into).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn test_created_at_serializes_as_iso_timestamp() {
        let response = MessageResponse::from(Message {
            id: 1,
            content: "hello".to_string(),
            created_at: Some(datetime!(2024-05-01 12:30:05.25)),
        });

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "id": 1, "content": "hello", "created_at": "2024-05-01T12:30:05.250000" }));
    }

    #[test]
    fn test_missing_created_at_serializes_as_null() {
        let response = MessageResponse { id: 2, content: "x".to_string(), created_at: None };

        let value = serde_json::to_value(&response).unwrap();
        assert!(value["created_at"].is_null());
    }

    #[test]
    fn test_list_preserves_order() {
        let list = MessageListResponse::from(vec![
            Message { id: 3, content: "newest".to_string(), created_at: None },
            Message { id: 1, content: "oldest".to_string(), created_at: None },
        ]);

        let ids: Vec<i32> = list.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_request_requires_string_content() {
        assert!(serde_json::from_value::<CreateMessageRequest>(json!({})).is_err());
        assert!(serde_json::from_value::<CreateMessageRequest>(json!({ "content": 42 })).is_err());

        let request: CreateMessageRequest =
            serde_json::from_value(json!({ "content": "hi", "extra": true })).unwrap();
        assert_eq!(request.content, "hi");
    }
}
