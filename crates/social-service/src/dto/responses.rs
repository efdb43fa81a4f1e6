//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names. IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use social_core::{Id, Page, Privacy};

// ============================================================================
// Common Response Types
// ============================================================================

/// Envelope shared by every list surface
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub message: String,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub data: Vec<T>,
}

impl<T> PageResponse<T> {
    /// Wrap one page of `data` out of `total_items` matching rows
    pub fn new(page: &Page, total_items: i64, data: Vec<T>) -> Self {
        Self {
            message: "success".to_string(),
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages(total_items),
            data,
        }
    }
}

// ============================================================================
// Content Responses
// ============================================================================

/// Owner projection embedded in posts and collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: Id,
    pub username: String,
    pub handle: String,
    pub avatar: Option<String>,
}

/// Media attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub id: Id,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    /// Set by the attachment viewability step; omitted until it runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_viewable: Option<bool>,
}

/// Collection with its owner and preview medias
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub privacy: Privacy,
    pub owner: OwnerResponse,
    pub preview_medias: Vec<MediaResponse>,
}

/// Post view model shared by the feeds and post search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Id,
    pub content: String,
    pub privacy: Privacy,
    pub owner: OwnerResponse,
    pub total_likes: i64,
    pub total_comments: i64,
    pub is_liked_by_current_user: bool,
    pub media: Vec<MediaResponse>,
    pub collection: Option<CollectionResponse>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User Responses
// ============================================================================

/// User search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchResponse {
    pub id: Id,
    pub username: String,
    pub handle: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub is_followed_by_current_user: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    /// `database` is `None` when no pool is configured
    pub fn ready(database: Option<bool>) -> Self {
        let (status, check) = match database {
            Some(true) => ("ready", "healthy"),
            Some(false) => ("not_ready", "unhealthy"),
            None => ("ready", "disabled"),
        };
        Self {
            status: status.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: check.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
