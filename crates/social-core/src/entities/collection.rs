//! Collection entity - a named, ordered set of media

use chrono::{DateTime, Utc};

use super::media::Media;
use super::user::UserSummary;
use crate::value_objects::{Id, Privacy};

/// A collection as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub privacy: Privacy,
    pub owner_id: Id,
    pub created_at: DateTime<Utc>,
}

/// A collection with its owner and preview media, in item order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRecord {
    pub collection: Collection,
    pub owner: UserSummary,
    pub preview_medias: Vec<Media>,
}
