//! Search service
//!
//! Post, user and collection search. The raw query is sanitized once and the
//! resulting expression is shared by every text branch of a search.

use std::collections::HashSet;

use social_core::{Audience, Filter, Id, PageRequest, SearchQuery, TextField, Viewer};
use tracing::{debug, instrument};

use crate::dto::{user_view, CollectionResponse, PageResponse, PostResponse, UserSearchResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::pages::post_page;

/// Search service
pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    /// Create a new SearchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Posts whose content or any attached media title matches, limited to
    /// what the viewer may read
    ///
    /// # Errors
    /// `MissingSearchQuery` when `query` is absent or empty
    #[instrument(skip(self, request), fields(viewer = %viewer))]
    pub async fn posts(
        &self,
        viewer: Viewer,
        query: Option<&str>,
        request: &PageRequest,
    ) -> ServiceResult<PageResponse<PostResponse>> {
        let query = SearchQuery::parse(query)?;
        let page = self.ctx.resolve_page(request);

        let filter = Filter::Any(vec![
            Filter::Matches(TextField::PostContent, query.clone()),
            Filter::Matches(TextField::MediaTitle, query),
        ])
        .and(self.ctx.visibility().posts(viewer, Audience::General));

        post_page(self.ctx, &filter, &page, viewer).await
    }

    /// Users whose username or handle matches. User discovery is not
    /// filtered by visibility.
    ///
    /// # Errors
    /// `MissingSearchQuery` when `query` is absent or empty
    #[instrument(skip(self, request), fields(viewer = %viewer))]
    pub async fn users(
        &self,
        viewer: Viewer,
        query: Option<&str>,
        request: &PageRequest,
    ) -> ServiceResult<PageResponse<UserSearchResponse>> {
        let query = SearchQuery::parse(query)?;
        let page = self.ctx.resolve_page(request);

        let filter = Filter::Any(vec![
            Filter::Matches(TextField::Username, query.clone()),
            Filter::Matches(TextField::Handle, query),
        ]);

        let users = self.ctx.user_repo().find_page(&filter, &page).await?;
        let total_items = self.ctx.user_repo().count(&filter).await?;

        let candidates: Vec<Id> = users.iter().map(|user| user.id).collect();
        let followed: HashSet<Id> = if candidates.is_empty() {
            HashSet::new()
        } else {
            self.ctx
                .follow_repo()
                .followed_among(viewer.id(), &candidates)
                .await?
                .into_iter()
                .collect()
        };

        let data = users
            .into_iter()
            .map(|user| {
                let is_followed = followed.contains(&user.id);
                user_view(user, is_followed)
            })
            .collect::<Vec<_>>();

        debug!(total_items, returned = data.len(), "User search composed");
        Ok(PageResponse::new(&page, total_items, data))
    }

    /// Collections whose name matches, limited to what the viewer may read
    ///
    /// # Errors
    /// `MissingSearchQuery` when `query` is absent or empty
    #[instrument(skip(self, request), fields(viewer = %viewer))]
    pub async fn collections(
        &self,
        viewer: Viewer,
        query: Option<&str>,
        request: &PageRequest,
    ) -> ServiceResult<PageResponse<CollectionResponse>> {
        let query = SearchQuery::parse(query)?;
        let page = self.ctx.resolve_page(request);

        let filter = Filter::Matches(TextField::CollectionName, query)
            .and(self.ctx.visibility().collections(viewer));

        let records = self.ctx.collection_repo().find_page(&filter, &page).await?;
        let total_items = self.ctx.collection_repo().count(&filter).await?;

        let data = records
            .into_iter()
            .map(CollectionResponse::from)
            .collect::<Vec<_>>();

        debug!(total_items, returned = data.len(), "Collection search composed");
        Ok(PageResponse::new(&page, total_items, data))
    }
}
