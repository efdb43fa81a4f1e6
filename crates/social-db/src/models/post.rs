//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A posts row joined with its owner and engagement counts
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub content: String,
    pub privacy: String,
    pub owner_id: i64,
    pub collection_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub owner_username: String,
    pub owner_handle: String,
    pub owner_avatar: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
}

/// Database model for likes table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct LikeModel {
    pub post_id: i64,
    pub user_id: i64,
}
