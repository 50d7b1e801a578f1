use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::conversation_index::ConversationIndex;
use super::message_log::MessageLog;
use super::route_registry::RouteRegistry;
use super::user_directory::UserDirectory;
use crate::error::CoreError;
use crate::models::{timestamp, Message, Route, RouteKind, User};

/// The whole application state: users, routes and the message log.
///
/// Owned by the session loop and passed to whoever needs it. Serializes to
/// the persisted document shape (`users`, `routes`, `msgs`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStore {
    #[serde(default)]
    pub users: UserDirectory,
    #[serde(default)]
    pub routes: RouteRegistry,
    #[serde(default, rename = "msgs")]
    pub messages: MessageLog,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Users =====

    pub fn register_user(&mut self, username: &str, mail: &str, password: &str) -> Result<(), CoreError> {
        match self.users.insert(username, User::new(mail, password)) {
            Ok(()) => {
                info!(username, "user registered");
                Ok(())
            }
            Err(e) => {
                warn!(username, error = %e, "signup rejected");
                Err(e)
            }
        }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), CoreError> {
        let result = self.users.authenticate(username, password);
        match &result {
            Ok(()) => info!(username, "login succeeded"),
            Err(e) => warn!(username, error = %e, "login rejected"),
        }
        result
    }

    // ===== Route Registry =====

    pub fn create_route(&mut self, owner: &str, start: &str, end: &str, kind: RouteKind) -> &Route {
        let route = self.routes.create(owner, start, end, kind);
        info!(route_id = route.id, owner, kind = %route.kind, "route created");
        route
    }

    pub fn find_route(&self, id: u64) -> Result<&Route, CoreError> {
        self.routes.find(id)
    }

    pub fn list_routes(&self) -> &[Route] {
        self.routes.list()
    }

    // ===== Messaging =====

    /// Send a message stamped with the current local time.
    pub fn send_message(&mut self, sender: &str, recipient: &str, body: &str) -> Result<&Message, CoreError> {
        self.send_message_at(sender, recipient, body, timestamp::now())
    }

    /// Send a message with an explicit timestamp.
    ///
    /// Both endpoints must be registered and distinct; a conversation is an
    /// unordered pair of two different users. Empty bodies are accepted.
    pub fn send_message_at(
        &mut self,
        sender: &str,
        recipient: &str,
        body: &str,
        sent_at: DateTime<FixedOffset>,
    ) -> Result<&Message, CoreError> {
        if sender == recipient {
            warn!(sender, "self-message rejected");
            return Err(CoreError::SelfMessage);
        }
        for username in [sender, recipient] {
            if !self.users.contains(username) {
                warn!(username, "message to or from unknown user rejected");
                return Err(CoreError::UserNotFound(username.to_string()));
            }
        }

        let message = self.messages.append(Message::new(sender, recipient, body, sent_at));
        info!(sender, recipient, "message sent");
        Ok(message)
    }

    /// Message the owner of a route. The route must exist before anything is
    /// sent.
    pub fn message_route_owner(&mut self, sender: &str, route_id: u64, body: &str) -> Result<&Message, CoreError> {
        let owner = self.find_route(route_id)?.owner.clone();
        self.send_message(sender, &owner, body)
    }

    // ===== Conversations =====

    /// Build the conversation index from `viewer`'s point of view. Recomputed
    /// from the full log on every call.
    pub fn conversations_for(&self, viewer: &str) -> ConversationIndex {
        ConversationIndex::build(viewer, self.messages.all())
    }
}
