//! Service context - dependency container for services
//!
//! Holds the repositories, the visibility policy, the attachment viewability
//! step and the pagination defaults the composers run against.

use std::sync::Arc;

use social_core::traits::{
    CollectionRepository, FollowRepository, PostRepository, UserRepository,
};
use social_core::{Page, PageRequest, PaginationSettings, StandardVisibility, VisibilityPolicy};

use super::error::{ServiceError, ServiceResult};
use super::viewability::{AttachmentViewability, NoopViewability};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Post, collection, user and follow repositories
/// - The visibility policy feeds and searches are filtered by
/// - The attachment viewability step applied to post pages
/// - Pagination defaults and bounds
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    post_repo: Arc<dyn PostRepository>,
    collection_repo: Arc<dyn CollectionRepository>,
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,

    // Policies
    visibility: Arc<dyn VisibilityPolicy>,
    viewability: Arc<dyn AttachmentViewability>,

    pagination: PaginationSettings,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        collection_repo: Arc<dyn CollectionRepository>,
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        visibility: Arc<dyn VisibilityPolicy>,
        viewability: Arc<dyn AttachmentViewability>,
        pagination: PaginationSettings,
    ) -> Self {
        Self {
            post_repo,
            collection_repo,
            user_repo,
            follow_repo,
            visibility,
            viewability,
            pagination,
        }
    }

    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the collection repository
    pub fn collection_repo(&self) -> &dyn CollectionRepository {
        self.collection_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    // === Policies ===

    /// Get the visibility policy
    pub fn visibility(&self) -> &dyn VisibilityPolicy {
        self.visibility.as_ref()
    }

    /// Get the attachment viewability step
    pub fn viewability(&self) -> &dyn AttachmentViewability {
        self.viewability.as_ref()
    }

    // === Pagination ===

    pub fn pagination(&self) -> PaginationSettings {
        self.pagination
    }

    /// Normalize raw paging parameters with the configured defaults
    pub fn resolve_page(&self, request: &PageRequest) -> Page {
        self.pagination.resolve(request)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Repositories are required. The visibility policy defaults to
/// [`StandardVisibility`], viewability to [`NoopViewability`] and pagination
/// to [`PaginationSettings::default`].
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    collection_repo: Option<Arc<dyn CollectionRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    visibility: Option<Arc<dyn VisibilityPolicy>>,
    viewability: Option<Arc<dyn AttachmentViewability>>,
    pagination: Option<PaginationSettings>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            post_repo: None,
            collection_repo: None,
            user_repo: None,
            follow_repo: None,
            visibility: None,
            viewability: None,
            pagination: None,
        }
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn collection_repo(mut self, repo: Arc<dyn CollectionRepository>) -> Self {
        self.collection_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn visibility(mut self, policy: Arc<dyn VisibilityPolicy>) -> Self {
        self.visibility = Some(policy);
        self
    }

    pub fn viewability(mut self, viewability: Arc<dyn AttachmentViewability>) -> Self {
        self.viewability = Some(viewability);
        self
    }

    pub fn pagination(mut self, settings: PaginationSettings) -> Self {
        self.pagination = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.collection_repo
                .ok_or_else(|| ServiceError::validation("collection_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
            self.visibility
                .unwrap_or_else(|| Arc::new(StandardVisibility)),
            self.viewability
                .unwrap_or_else(|| Arc::new(NoopViewability)),
            self.pagination.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
