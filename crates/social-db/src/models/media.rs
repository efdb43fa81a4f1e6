//! Media database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for media table
#[derive(Debug, Clone, FromRow)]
pub struct MediaModel {
    pub id: i64,
    pub post_id: Option<i64>,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
