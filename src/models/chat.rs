use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One chat exchange as written to the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLogRecord {
    pub symbol: String,
    pub user_msg: String,
    pub ai_reply: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatLogRecord {
    pub fn new(
        symbol: impl Into<String>,
        user_msg: impl Into<String>,
        ai_reply: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            user_msg: user_msg.into(),
            ai_reply: ai_reply.into(),
            timestamp: Utc::now(),
        }
    }
}
