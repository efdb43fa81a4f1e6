//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use social_core::entities::User;
use social_core::policy::Filter;
use social_core::traits::{RepoResult, UserRepository};
use social_core::value_objects::Page;

use crate::models::UserModel;
use crate::query::{push_page, push_where, Target};

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, filter))]
    async fn find_page(&self, filter: &Filter, page: &Page) -> RepoResult<Vec<User>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT u.id, u.username, u.handle, u.avatar, u.bio, u.created_at FROM users u",
        );
        push_where(&mut builder, filter, Target::Users);
        push_page(&mut builder, page, Target::Users);

        let models = builder
            .build_query_as::<UserModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, filter: &Filter) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM users u");
        push_where(&mut builder, filter, Target::Users);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
