use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// One direct message. The log is append-only, so a message has no identity
/// beyond its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "from")]
    pub sender: String,
    #[serde(rename = "to")]
    pub recipient: String,
    #[serde(rename = "msg")]
    pub body: String,
    #[serde(rename = "time", with = "timestamp")]
    pub sent_at: DateTime<FixedOffset>,
}

impl Message {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        body: impl Into<String>,
        sent_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            body: body.into(),
            sent_at,
        }
    }

    /// Check if the given user sent or received this message
    pub fn involves(&self, username: &str) -> bool {
        self.sender == username || self.recipient == username
    }
}
