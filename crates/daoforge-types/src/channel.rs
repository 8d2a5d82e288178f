use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One-shot request for creating the DAO's off-chain notification channel.
/// Derived from the draft at publish time; it has no identity of its own
/// and is dropped once the create call resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRequest {
    pub title: String,
    pub description: String,
    /// Inline-encoded logo, empty when the draft has none.
    pub image: String,
    pub private: bool,
}

impl ChannelRequest {
    pub fn new(title: String, description: String, image: String) -> Self {
        Self {
            title,
            description,
            image,
            private: false,
        }
    }
}

/// Handle returned by the messaging backend for a created channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelHandle {
    pub chat_id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl ChannelHandle {
    pub fn new(chat_id: String) -> Self {
        Self {
            chat_id,
            created_at: Utc::now(),
        }
    }
}
