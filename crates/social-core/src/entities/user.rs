//! User entity - a profile on the platform

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// User account with its public profile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub handle: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Id, username: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            handle: handle.into(),
            avatar: None,
            bio: None,
            created_at: Utc::now(),
        }
    }

    /// Owner summary embedded in posts and collections
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            handle: self.handle.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// The subset of a user shown next to content they own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Id,
    pub username: String,
    pub handle: String,
    pub avatar: Option<String>,
}
