//! Repository traits (ports) - define the interface for data access
//!
//! Read-side ports for feeds and search. Every list query takes a
//! [`Filter`] built by the visibility policy, so the adapter applies
//! visibility, search and pagination in a single statement. Counts take the
//! same filter and must agree with the rows `find_page` would return across
//! all pages.

use async_trait::async_trait;

use crate::entities::{CollectionRecord, PostRecord, User};
use crate::error::DomainError;
use crate::policy::Filter;
use crate::value_objects::{Id, Page};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// One page of posts matching `filter`, ordered by creation time per `page.order`.
    ///
    /// `viewer` is used to decide which likers to load; adapters may load
    /// only the viewer's own like.
    async fn find_page(
        &self,
        filter: &Filter,
        page: &Page,
        viewer: Id,
    ) -> RepoResult<Vec<PostRecord>>;

    /// Number of posts matching `filter`
    async fn count(&self, filter: &Filter) -> RepoResult<i64>;
}

// ============================================================================
// Collection Repository
// ============================================================================

#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// One page of collections matching `filter`, with owner and preview media
    async fn find_page(&self, filter: &Filter, page: &Page) -> RepoResult<Vec<CollectionRecord>>;

    /// Number of collections matching `filter`
    async fn count(&self, filter: &Filter) -> RepoResult<i64>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// One page of users matching `filter`
    async fn find_page(&self, filter: &Filter, page: &Page) -> RepoResult<Vec<User>>;

    /// Number of users matching `filter`
    async fn count(&self, filter: &Filter) -> RepoResult<i64>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Whether the edge `follower -> followed` exists
    async fn is_following(&self, follower: Id, followed: Id) -> RepoResult<bool>;

    /// The subset of `candidates` that `follower` follows
    async fn followed_among(&self, follower: Id, candidates: &[Id]) -> RepoResult<Vec<Id>>;
}
