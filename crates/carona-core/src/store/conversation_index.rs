//! Per-user grouping of the message log into conversations.
//!
//! Built from the full log on demand. Ordering rules:
//! - conversations appear in the order they are first met while scanning the
//!   viewer's messages newest to oldest, so the one holding the most recent
//!   message comes first and later activity elsewhere never reshuffles ties
//! - each transcript is ascending by `sent_at`
//!
//! Both sorts are stable: messages with equal timestamps keep their log
//! order, in the scan and inside a transcript.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::models::{ConversationKey, Message};

/// All messages between the viewer and one other user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub key: ConversationKey,
    /// The participant that is not the viewer
    pub counterpart: String,
    /// Ascending by `sent_at`, never empty
    pub messages: Vec<Message>,
    /// Timestamp of the last message in the transcript
    pub last_activity: DateTime<FixedOffset>,
}

impl Conversation {
    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversationIndex {
    viewer: String,
    conversations: Vec<Conversation>,
}

impl ConversationIndex {
    pub fn build(viewer: &str, log: &[Message]) -> Self {
        let mut user_msgs: Vec<&Message> = log.iter().filter(|m| m.involves(viewer)).collect();
        user_msgs.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));

        // Keys in first-seen order, and each key's messages in scan order.
        let mut order: Vec<ConversationKey> = Vec::new();
        let mut grouped: HashMap<ConversationKey, Vec<&Message>> = HashMap::new();
        for msg in user_msgs {
            let key = ConversationKey::of(msg);
            grouped
                .entry(key)
                .or_insert_with_key(|key| {
                    order.push(key.clone());
                    Vec::new()
                })
                .push(msg);
        }

        let mut conversations = Vec::with_capacity(order.len());
        for key in order {
            let Some(group) = grouped.remove(&key) else {
                continue;
            };
            let mut messages: Vec<Message> = group.into_iter().cloned().collect();
            messages.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));

            let Some(last_activity) = messages.last().map(|m| m.sent_at) else {
                continue;
            };
            // A self-message degenerates the pair to one user; show it as
            // a conversation with oneself rather than dropping it.
            let counterpart = key.counterpart(viewer).unwrap_or(viewer).to_string();

            conversations.push(Conversation {
                key,
                counterpart,
                messages,
                last_activity,
            });
        }

        debug!(viewer, conversations = conversations.len(), "conversation index built");

        Self {
            viewer: viewer.to_string(),
            conversations,
        }
    }

    /// Conversations in display order.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, key: &ConversationKey) -> Option<&Conversation> {
        self.conversations.iter().find(|c| &c.key == key)
    }

    /// Conversation with `other`, if the viewer has exchanged any messages
    /// with them.
    pub fn with_user(&self, other: &str) -> Option<&Conversation> {
        self.get(&ConversationKey::new(&self.viewer, other))
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
