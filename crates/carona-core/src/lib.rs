pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod store;
pub mod tracing_setup;

pub use error::{CoreError, StorageError};
pub use models::{ConversationKey, Message, Route, RouteKind, User};
pub use store::{Conversation, ConversationIndex, ConversationList, ConversationSummary, DataStore, DocumentStorage};
