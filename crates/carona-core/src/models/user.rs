use serde::{Deserialize, Serialize};

/// A registered account. The username is the key of the user map and is not
/// repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub mail: String,
    /// Stored and compared as plain text. Hashing and constant-time
    /// comparison are out of scope for this tool and need a product decision
    /// before being changed, since existing documents carry plain passwords.
    pub password: String,
}

impl User {
    pub fn new(mail: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mail: mail.into(),
            password: password.into(),
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
