//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use social_core::traits::{FollowRepository, RepoResult};
use social_core::value_objects::Id;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn is_following(&self, follower: Id, followed: Id) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM follows WHERE follower_id = $1 AND followed_id = $2
            )
            "#,
        )
        .bind(follower.into_inner())
        .bind(followed.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, candidates), fields(candidates = candidates.len()))]
    async fn followed_among(&self, follower: Id, candidates: &[Id]) -> RepoResult<Vec<Id>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = candidates.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT followed_id
            FROM follows
            WHERE follower_id = $1 AND followed_id = ANY($2)
            "#,
        )
        .bind(follower.into_inner())
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Id::new).collect())
    }
}
