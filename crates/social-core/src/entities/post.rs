//! Post entity and the aggregate read model served by feeds and search

use chrono::{DateTime, Utc};

use super::collection::CollectionRecord;
use super::media::Media;
use super::user::UserSummary;
use crate::value_objects::{Id, Privacy};

/// A post as stored; visibility is computed, never stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Id,
    pub content: String,
    pub privacy: Privacy,
    pub owner_id: Id,
    pub collection_id: Option<Id>,
    pub created_at: DateTime<Utc>,
}

/// A post with everything a feed entry shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub post: Post,
    pub owner: UserSummary,
    pub media: Vec<Media>,
    pub collection: Option<CollectionRecord>,
    pub like_count: i64,
    pub comment_count: i64,
    /// Users who liked the post. Storage adapters may restrict this to the
    /// requesting viewer, since only the viewer's membership is ever read.
    pub liker_ids: Vec<Id>,
}

impl PostRecord {
    /// Whether `user_id` appears among the likers
    pub fn is_liked_by(&self, user_id: Id) -> bool {
        self.liker_ids.contains(&user_id)
    }
}
