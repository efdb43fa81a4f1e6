//! Fetch + count + shape, shared by every post surface

use social_core::{Filter, Page, Viewer};
use tracing::{debug, warn};

use crate::dto::{post_view, PageResponse, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Load one page of posts under `filter`, count all matches under the same
/// filter, map each record and hand the page to the viewability step.
///
/// A failed count fails the whole call.
pub(crate) async fn post_page(
    ctx: &ServiceContext,
    filter: &Filter,
    page: &Page,
    viewer: Viewer,
) -> ServiceResult<PageResponse<PostResponse>> {
    let records = ctx.post_repo().find_page(filter, page, viewer.id()).await?;
    let total_items = ctx.post_repo().count(filter).await?;

    let views: Vec<PostResponse> = records
        .into_iter()
        .map(|record| post_view(record, viewer))
        .collect();
    let shaped = views.len();

    let annotated = ctx.viewability().annotate(views, viewer).await?;
    if annotated.len() != shaped {
        warn!(expected = shaped, got = annotated.len(), "Viewability step changed page size");
        return Err(ServiceError::internal(
            "attachment viewability must not add or drop posts",
        ));
    }

    debug!(total_items, returned = shaped, "Post page composed");
    Ok(PageResponse::new(page, total_items, annotated))
}
