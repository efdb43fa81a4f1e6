//! Collection database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A collections row joined with its owner
#[derive(Debug, Clone, FromRow)]
pub struct CollectionModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub privacy: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub owner_username: String,
    pub owner_handle: String,
    pub owner_avatar: Option<String>,
}

/// A collection item resolved to its media, for preview lists
#[derive(Debug, Clone, FromRow)]
pub struct CollectionItemMediaModel {
    pub collection_id: i64,
    pub position: i32,
    pub media_id: i64,
    pub post_id: Option<i64>,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
