//! In-memory repositories
//!
//! Every port is answered by evaluating the same [`Filter`] the Postgres
//! adapter translates to SQL, against a [`FollowSet`] snapshot.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use social_core::traits::{
    CollectionRepository, FollowRepository, PostRepository, UserRepository,
};
use social_core::{
    CollectionRecord, DomainError, Filter, FollowEdge, FollowGraph, FollowSet, Id, Page,
    PostRecord, RepoResult, SortOrder, User,
};

/// Shared backing store for all four repositories
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    follows: FollowSet,
    posts: Vec<PostRecord>,
    collections: Vec<CollectionRecord>,
    fail_counts: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn follow(&mut self, follower: Id, followed: Id) {
        self.follows.insert(FollowEdge::new(follower, followed));
    }

    pub fn add_post(&mut self, record: PostRecord) {
        self.posts.push(record);
    }

    pub fn add_collection(&mut self, record: CollectionRecord) {
        self.collections.push(record);
    }

    pub fn follows(&self) -> &FollowSet {
        &self.follows
    }

    /// Make every subsequent count fail as an upstream error
    pub fn fail_counts(&self) {
        self.fail_counts.store(true, Ordering::SeqCst);
    }

    fn check_count(&self) -> RepoResult<()> {
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("count unavailable".to_string()));
        }
        Ok(())
    }
}

/// Order by creation time then id, and cut out the page window
fn window<T>(mut rows: Vec<T>, page: &Page, key: impl Fn(&T) -> (DateTime<Utc>, Id)) -> Vec<T> {
    rows.sort_by_key(&key);
    if page.order == SortOrder::Desc {
        rows.reverse();
    }

    let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
    let take = usize::try_from(page.take()).unwrap_or(usize::MAX);
    rows.into_iter().skip(skip).take(take).collect()
}

fn count_matching<T>(rows: &[T], filter: &Filter, graph: &FollowSet) -> i64
where
    T: social_core::Filterable,
{
    let matching = rows.iter().filter(|row| filter.evaluate(*row, graph)).count();
    i64::try_from(matching).unwrap_or(i64::MAX)
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_page(
        &self,
        filter: &Filter,
        page: &Page,
        _viewer: Id,
    ) -> RepoResult<Vec<PostRecord>> {
        let rows: Vec<PostRecord> = self
            .posts
            .iter()
            .filter(|record| filter.evaluate(*record, &self.follows))
            .cloned()
            .collect();
        Ok(window(rows, page, |r| (r.post.created_at, r.post.id)))
    }

    async fn count(&self, filter: &Filter) -> RepoResult<i64> {
        self.check_count()?;
        Ok(count_matching(&self.posts, filter, &self.follows))
    }
}

#[async_trait]
impl CollectionRepository for MemoryStore {
    async fn find_page(&self, filter: &Filter, page: &Page) -> RepoResult<Vec<CollectionRecord>> {
        let rows: Vec<CollectionRecord> = self
            .collections
            .iter()
            .filter(|record| filter.evaluate(*record, &self.follows))
            .cloned()
            .collect();
        Ok(window(rows, page, |r| (r.collection.created_at, r.collection.id)))
    }

    async fn count(&self, filter: &Filter) -> RepoResult<i64> {
        self.check_count()?;
        Ok(count_matching(&self.collections, filter, &self.follows))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_page(&self, filter: &Filter, page: &Page) -> RepoResult<Vec<User>> {
        let rows: Vec<User> = self
            .users
            .iter()
            .filter(|user| filter.evaluate(*user, &self.follows))
            .cloned()
            .collect();
        Ok(window(rows, page, |u| (u.created_at, u.id)))
    }

    async fn count(&self, filter: &Filter) -> RepoResult<i64> {
        self.check_count()?;
        Ok(count_matching(&self.users, filter, &self.follows))
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn is_following(&self, follower: Id, followed: Id) -> RepoResult<bool> {
        Ok(self.follows.is_following(follower, followed))
    }

    async fn followed_among(&self, follower: Id, candidates: &[Id]) -> RepoResult<Vec<Id>> {
        Ok(candidates
            .iter()
            .copied()
            .filter(|candidate| self.follows.is_following(follower, *candidate))
            .collect())
    }
}
