//! Media entity - an attachment of a post, reusable as a collection item

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// A media attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id: Id,
    /// Post the media was attached to, if any
    pub post_id: Option<Id>,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
