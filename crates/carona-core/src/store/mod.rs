pub mod conversation_index;
pub mod data_store;
pub mod document;
pub mod message_log;
pub mod presenter;
pub mod route_registry;
pub mod user_directory;

pub use conversation_index::{Conversation, ConversationIndex};
pub use data_store::DataStore;
pub use document::DocumentStorage;
pub use message_log::MessageLog;
pub use presenter::{list_summaries, resolve, ConversationList, ConversationSummary};
pub use route_registry::RouteRegistry;
pub use user_directory::UserDirectory;
