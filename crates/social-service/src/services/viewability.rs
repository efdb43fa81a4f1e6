//! Attachment viewability
//!
//! Last step of every post surface. Whether a viewer may open a given media
//! attachment is decided elsewhere; composers only hand the page over and
//! take it back.

use async_trait::async_trait;
use social_core::Viewer;

use crate::dto::PostResponse;

use super::error::ServiceResult;

/// Sets `isViewable` on post media for `viewer`.
///
/// Implementations may only add or adjust per-media flags. They must return
/// the same posts in the same order.
#[async_trait]
pub trait AttachmentViewability: Send + Sync {
    async fn annotate(
        &self,
        posts: Vec<PostResponse>,
        viewer: Viewer,
    ) -> ServiceResult<Vec<PostResponse>>;
}

/// Leaves every post untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewability;

#[async_trait]
impl AttachmentViewability for NoopViewability {
    async fn annotate(
        &self,
        posts: Vec<PostResponse>,
        _viewer: Viewer,
    ) -> ServiceResult<Vec<PostResponse>> {
        Ok(posts)
    }
}
