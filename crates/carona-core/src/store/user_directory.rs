use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::User;

/// Sub-store for registered users, keyed by username.
///
/// A `BTreeMap` keeps the saved document byte-stable across reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory {
    users: BTreeMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Getters =====

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // ===== Mutations =====

    /// Add a user. Existing users are never overwritten.
    pub fn insert(&mut self, username: &str, user: User) -> Result<(), CoreError> {
        if username.trim().is_empty() {
            return Err(CoreError::Validation("username must not be empty".to_string()));
        }
        if self.users.contains_key(username) {
            return Err(CoreError::DuplicateUser(username.to_string()));
        }
        self.users.insert(username.to_string(), user);
        Ok(())
    }

    /// Plain-text credential check.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), CoreError> {
        let user = self
            .users
            .get(username)
            .ok_or_else(|| CoreError::UserNotFound(username.to_string()))?;
        if user.password_matches(password) {
            Ok(())
        } else {
            Err(CoreError::InvalidPassword)
        }
    }
}
