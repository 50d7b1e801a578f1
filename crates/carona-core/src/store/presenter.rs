use chrono::{DateTime, FixedOffset};

use super::conversation_index::{Conversation, ConversationIndex};
use super::data_store::DataStore;
use crate::error::CoreError;

/// One row of the conversation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    /// 1-based position in the list
    pub display_index: usize,
    pub counterpart: String,
    pub last_message_time: DateTime<FixedOffset>,
}

/// A snapshot of one user's conversations with stable 1-based indices.
///
/// Listing and resolving go through the same snapshot, so a message that
/// arrives between the two cannot shift what an index points at. Build a new
/// list to pick up new messages.
#[derive(Debug, Clone)]
pub struct ConversationList {
    index: ConversationIndex,
}

impl ConversationList {
    pub fn for_user(store: &DataStore, viewer: &str) -> Self {
        Self {
            index: store.conversations_for(viewer),
        }
    }

    pub fn summaries(&self) -> Vec<ConversationSummary> {
        self.index
            .conversations()
            .iter()
            .enumerate()
            .map(|(i, conversation)| ConversationSummary {
                display_index: i + 1,
                counterpart: conversation.counterpart.clone(),
                last_message_time: conversation.last_activity,
            })
            .collect()
    }

    /// Look up a conversation by its 1-based display index.
    pub fn resolve(&self, display_index: usize) -> Result<&Conversation, CoreError> {
        let count = self.index.len();
        display_index
            .checked_sub(1)
            .and_then(|i| self.index.conversations().get(i))
            .ok_or(CoreError::ConversationOutOfRange {
                index: display_index,
                count,
            })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Summaries of `viewer`'s conversations, freshly computed.
pub fn list_summaries(store: &DataStore, viewer: &str) -> Vec<ConversationSummary> {
    ConversationList::for_user(store, viewer).summaries()
}

/// Resolve a display index against a fresh index. Prefer a
/// [`ConversationList`] when the same listing is shown and then resolved.
pub fn resolve(store: &DataStore, viewer: &str, display_index: usize) -> Result<Conversation, CoreError> {
    ConversationList::for_user(store, viewer)
        .resolve(display_index)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(text).unwrap()
    }

    fn sample_store() -> DataStore {
        let mut store = DataStore::new();
        for name in ["A", "B", "C"] {
            store.register_user(name, "x@example.com", "pw").unwrap();
        }
        store.send_message_at("A", "B", "t1", at("2024-01-01T01:00:00Z")).unwrap();
        store.send_message_at("A", "C", "t3", at("2024-01-01T03:00:00Z")).unwrap();
        store.send_message_at("B", "A", "t2", at("2024-01-01T02:00:00Z")).unwrap();
        store
    }

    #[test]
    fn test_summaries_are_numbered_in_display_order() {
        let store = sample_store();
        let summaries = list_summaries(&store, "A");
        assert_eq!(
            summaries,
            vec![
                ConversationSummary {
                    display_index: 1,
                    counterpart: "C".into(),
                    last_message_time: at("2024-01-01T03:00:00Z"),
                },
                ConversationSummary {
                    display_index: 2,
                    counterpart: "B".into(),
                    last_message_time: at("2024-01-01T02:00:00Z"),
                },
            ]
        );
    }

    #[test]
    fn test_resolve_bounds() {
        let store = sample_store();
        let list = ConversationList::for_user(&store, "A");
        let count = list.len();
        assert_eq!(count, 2);

        assert_eq!(
            list.resolve(0).unwrap_err(),
            CoreError::ConversationOutOfRange { index: 0, count }
        );
        assert_eq!(
            list.resolve(count + 1).unwrap_err(),
            CoreError::ConversationOutOfRange { index: 3, count }
        );

        for summary in list.summaries() {
            let conversation = list.resolve(summary.display_index).unwrap();
            assert_eq!(conversation.counterpart, summary.counterpart);
            assert_eq!(conversation.last_activity, summary.last_message_time);
        }
    }

    #[test]
    fn test_resolve_on_empty_list() {
        let store = DataStore::new();
        assert!(list_summaries(&store, "nobody").is_empty());
        assert_eq!(
            resolve(&store, "nobody", 1),
            Err(CoreError::ConversationOutOfRange { index: 1, count: 0 })
        );
    }

    #[test]
    fn test_snapshot_is_not_shifted_by_new_messages() {
        let mut store = sample_store();
        let list = ConversationList::for_user(&store, "B");
        assert_eq!(list.len(), 1);

        store.send_message_at("C", "B", "new", at("2024-01-01T04:00:00Z")).unwrap();

        assert_eq!(list.resolve(1).unwrap().counterpart, "A");
        assert_eq!(resolve(&store, "B", 1).unwrap().counterpart, "C");
    }
}
