//! Feed service
//!
//! The home ("for you") feed and the following feed. Both run the same
//! fetch/count/shape flow and differ only in the visibility variant.

use social_core::{Audience, PageRequest, Viewer};
use tracing::instrument;

use crate::dto::{PageResponse, PostResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::pages::post_page;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Everything the viewer may read, their own posts included
    #[instrument(skip(self, request), fields(viewer = %viewer))]
    pub async fn for_you(
        &self,
        viewer: Viewer,
        request: &PageRequest,
    ) -> ServiceResult<PageResponse<PostResponse>> {
        self.compose(viewer, Audience::General, request).await
    }

    /// Posts from accounts the viewer follows; never the viewer's own
    #[instrument(skip(self, request), fields(viewer = %viewer))]
    pub async fn following(
        &self,
        viewer: Viewer,
        request: &PageRequest,
    ) -> ServiceResult<PageResponse<PostResponse>> {
        self.compose(viewer, Audience::Following, request).await
    }

    async fn compose(
        &self,
        viewer: Viewer,
        audience: Audience,
        request: &PageRequest,
    ) -> ServiceResult<PageResponse<PostResponse>> {
        let page = self.ctx.resolve_page(request);
        let filter = self.ctx.visibility().posts(viewer, audience);

        post_page(self.ctx, &filter, &page, viewer).await
    }
}
