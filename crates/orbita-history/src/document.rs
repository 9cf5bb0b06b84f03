use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orbita_agent::Turn;

/// One persisted conversation thread
///
/// The caller-supplied thread id doubles as the document key, so every save
/// is a whole-document upsert and every load is a point lookup. `user_id` is
/// attribution metadata only and never used for lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadDocument {
    #[serde(rename = "_id")]
    pub thread_id: String,
    pub user_id: String,
    pub messages: Vec<Turn>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbita_agent::Role;

    fn sample() -> ThreadDocument {
        ThreadDocument {
            thread_id: "thread-1".to_string(),
            user_id: "user-1".to_string(),
            messages: vec![Turn::user("oi"), Turn::assistant("olá")],
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_thread_id_maps_to_document_key() {
        let raw = bson::to_document(&sample()).unwrap();
        assert_eq!(raw.get_str("_id").unwrap(), "thread-1");
        assert_eq!(raw.get_str("user_id").unwrap(), "user-1");
        assert_eq!(raw.get_array("messages").unwrap().len(), 2);
    }

    #[test]
    fn test_updated_at_stored_as_native_datetime() {
        let raw = bson::to_document(&sample()).unwrap();
        assert!(raw.get_datetime("updated_at").is_ok());
    }

    #[test]
    fn test_turn_order_survives_bson_round_trip() {
        let raw = bson::to_document(&sample()).unwrap();
        let back: ThreadDocument = bson::from_document(raw).unwrap();

        assert_eq!(back.messages.len(), 2);
        assert_eq!(back.messages[0].role, Role::User);
        assert_eq!(back.messages[0].content, "oi");
        assert_eq!(back.messages[1].role, Role::Assistant);
        assert_eq!(back.messages[1].content, "olá");
    }
}
