//! PostgreSQL implementation of PostRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use social_core::entities::PostRecord;
use social_core::policy::Filter;
use social_core::traits::{PostRepository, RepoResult};
use social_core::value_objects::{Id, Page};

use crate::models::PostModel;
use crate::query::{push_page, push_where, Target};

use super::error::map_db_error;
use super::loaders::{collections_by_id, likes_by_user, media_by_post};

const POST_SELECT: &str = r#"
    SELECT p.id, p.content, p.privacy, p.owner_id, p.collection_id, p.created_at,
           u.username AS owner_username, u.handle AS owner_handle, u.avatar AS owner_avatar,
           (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count,
           (SELECT COUNT(*) FROM comments cm WHERE cm.post_id = p.id) AS comment_count
    FROM posts p
    JOIN users u ON u.id = p.owner_id
"#;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load media, attached collection and the viewer's like for a page of posts
    async fn attach(&self, records: &mut [PostRecord], viewer: Id) -> RepoResult<()> {
        let post_ids: Vec<i64> = records.iter().map(|r| r.post.id.into_inner()).collect();

        let collection_ids: Vec<i64> = records
            .iter()
            .filter_map(|r| r.post.collection_id.map(Id::into_inner))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let mut media = media_by_post(&self.pool, &post_ids).await?;
        let collections = collections_by_id(&self.pool, &collection_ids).await?;
        let liked: HashSet<i64> = likes_by_user(&self.pool, &post_ids, viewer.into_inner())
            .await?
            .into_iter()
            .map(|like| like.post_id)
            .collect();

        for record in records.iter_mut() {
            let id = record.post.id.into_inner();
            record.media = media.remove(&id).unwrap_or_default();
            record.collection = record
                .post
                .collection_id
                .and_then(|cid| collections.get(&cid.into_inner()).cloned());
            if liked.contains(&id) {
                record.liker_ids.push(viewer);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self, filter))]
    async fn find_page(
        &self,
        filter: &Filter,
        page: &Page,
        viewer: Id,
    ) -> RepoResult<Vec<PostRecord>> {
        let mut builder = QueryBuilder::<Postgres>::new(POST_SELECT);
        push_where(&mut builder, filter, Target::Posts);
        push_page(&mut builder, page, Target::Posts);

        let models = builder
            .build_query_as::<PostModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut records = models
            .into_iter()
            .map(PostRecord::try_from)
            .collect::<RepoResult<Vec<_>>>()?;
        self.attach(&mut records, viewer).await?;

        Ok(records)
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, filter: &Filter) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM posts p");
        push_where(&mut builder, filter, Target::Posts);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
