use std::path::PathBuf;

/// Domain errors. None of these are fatal: the session reports them and
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Route {0} not found")]
    RouteNotFound(u64),

    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("Conversation {index} not found ({count} available)")]
    ConversationOutOfRange { index: usize, count: usize },

    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Cannot send a message to yourself")]
    SelfMessage,
}

impl CoreError {
    /// True for the lookup failures (unknown route, user or conversation).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::RouteNotFound(_)
                | CoreError::UserNotFound(_)
                | CoreError::ConversationOutOfRange { .. }
        )
    }
}

/// Failures reading or writing the persisted document. These abort the
/// process.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}
