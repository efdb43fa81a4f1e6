//! PostgreSQL implementation of CollectionRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use social_core::entities::CollectionRecord;
use social_core::policy::Filter;
use social_core::traits::{CollectionRepository, RepoResult};
use social_core::value_objects::Page;

use crate::models::CollectionModel;
use crate::query::{push_page, push_where, Target};

use super::error::map_db_error;
use super::loaders::{attach_preview_media, COLLECTION_SELECT};

/// PostgreSQL implementation of CollectionRepository
#[derive(Clone)]
pub struct PgCollectionRepository {
    pool: PgPool,
}

impl PgCollectionRepository {
    /// Create a new PgCollectionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository for PgCollectionRepository {
    #[instrument(skip(self, filter))]
    async fn find_page(&self, filter: &Filter, page: &Page) -> RepoResult<Vec<CollectionRecord>> {
        let mut builder = QueryBuilder::<Postgres>::new(COLLECTION_SELECT);
        push_where(&mut builder, filter, Target::Collections);
        push_page(&mut builder, page, Target::Collections);

        let models = builder
            .build_query_as::<CollectionModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut records = models
            .into_iter()
            .map(CollectionRecord::try_from)
            .collect::<RepoResult<Vec<_>>>()?;
        attach_preview_media(&self.pool, &mut records).await?;

        Ok(records)
    }

    #[instrument(skip(self, filter))]
    async fn count(&self, filter: &Filter) -> RepoResult<i64> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM collections c");
        push_where(&mut builder, filter, Target::Collections);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
