//! Feed handlers
//!
//! Endpoints for the home ("for you") and following feeds.

use axum::{extract::State, Json};
use social_service::{FeedService, PageResponse, PostResponse};

use crate::extractors::{AuthUser, Paging};
use crate::response::ApiResult;
use crate::state::AppState;

/// Home feed
///
/// GET /feed/for-you
pub async fn for_you(
    State(state): State<AppState>,
    auth: AuthUser,
    Paging(request): Paging,
) -> ApiResult<Json<PageResponse<PostResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.for_you(auth.viewer, &request).await?;
    Ok(Json(response))
}

/// Following feed
///
/// GET /feed/following
pub async fn following(
    State(state): State<AppState>,
    auth: AuthUser,
    Paging(request): Paging,
) -> ApiResult<Json<PageResponse<PostResponse>>> {
    let service = FeedService::new(state.service_context());
    let response = service.following(auth.viewer, &request).await?;
    Ok(Json(response))
}
