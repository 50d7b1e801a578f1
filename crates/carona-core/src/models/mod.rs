pub mod conversation_key;
pub mod message;
pub mod route;
pub mod timestamp;
pub mod user;

pub use conversation_key::ConversationKey;
pub use message::Message;
pub use route::{Route, RouteKind};
pub use user::User;
