//! Search handlers
//!
//! Endpoints for post, user and collection search.

use axum::{extract::State, Json};
use social_service::{
    CollectionResponse, PageResponse, PostResponse, SearchService, UserSearchResponse,
};

use crate::extractors::{AuthUser, Paging, SearchParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Search posts by content and media title
///
/// GET /search/posts?query=
pub async fn search_posts(
    State(state): State<AppState>,
    auth: AuthUser,
    params: SearchParams,
    Paging(request): Paging,
) -> ApiResult<Json<PageResponse<PostResponse>>> {
    let service = SearchService::new(state.service_context());
    let response = service.posts(auth.viewer, params.query(), &request).await?;
    Ok(Json(response))
}

/// Search users by username and handle
///
/// GET /search/users?query=
pub async fn search_users(
    State(state): State<AppState>,
    auth: AuthUser,
    params: SearchParams,
    Paging(request): Paging,
) -> ApiResult<Json<PageResponse<UserSearchResponse>>> {
    let service = SearchService::new(state.service_context());
    let response = service.users(auth.viewer, params.query(), &request).await?;
    Ok(Json(response))
}

/// Search collections by name
///
/// GET /search/collections?query=
pub async fn search_collections(
    State(state): State<AppState>,
    auth: AuthUser,
    params: SearchParams,
    Paging(request): Paging,
) -> ApiResult<Json<PageResponse<CollectionResponse>>> {
    let service = SearchService::new(state.service_context());
    let response = service
        .collections(auth.viewer, params.query(), &request)
        .await?;
    Ok(Json(response))
}
