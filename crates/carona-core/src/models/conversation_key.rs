use std::fmt;

use super::message::Message;

/// Identity of a conversation: the unordered pair of its two participants.
///
/// The pair is stored lexicographically sorted, so `{ana, bia}` and
/// `{bia, ana}` produce equal (and equally hashed) keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationKey {
    low: String,
    high: String,
}

impl ConversationKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    pub fn of(message: &Message) -> Self {
        Self::new(&message.sender, &message.recipient)
    }

    pub fn participants(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }

    /// The participant that is not `viewer`, or `None` if the viewer is not
    /// part of this conversation.
    pub fn counterpart(&self, viewer: &str) -> Option<&str> {
        if self.low == viewer {
            Some(&self.high)
        } else if self.high == viewer {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}
