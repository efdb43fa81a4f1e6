//! Privacy level of posts and collections

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Audience an owner grants to a post or collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Privacy {
    /// Readable by every viewer
    Public,
    /// Readable by the owner's friends (mutual followers)
    FriendsOnly,
}

impl Privacy {
    /// Storage literal
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::FriendsOnly => "FRIENDS_ONLY",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Privacy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(Self::Public),
            "FRIENDS_ONLY" => Ok(Self::FriendsOnly),
            other => Err(DomainError::InvalidPrivacy(other.to_string())),
        }
    }
}
