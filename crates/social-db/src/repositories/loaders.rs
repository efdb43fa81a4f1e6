//! Child-list loaders shared by the post and collection repositories
//!
//! Each loader runs one query for a whole page of parents and groups the
//! rows by parent id, preserving the query's order within each group.

use std::collections::HashMap;

use sqlx::PgPool;

use social_core::entities::{CollectionRecord, Media};
use social_core::traits::RepoResult;

use crate::models::{CollectionItemMediaModel, CollectionModel, LikeModel, MediaModel};

use super::error::map_db_error;

/// Base select for collections joined with their owner
pub(crate) const COLLECTION_SELECT: &str = r#"
    SELECT c.id, c.name, c.description, c.photo, c.privacy, c.owner_id, c.created_at,
           u.username AS owner_username, u.handle AS owner_handle, u.avatar AS owner_avatar
    FROM collections c
    JOIN users u ON u.id = c.owner_id
"#;

/// Media attached to each post, oldest first
pub(crate) async fn media_by_post(
    pool: &PgPool,
    post_ids: &[i64],
) -> RepoResult<HashMap<i64, Vec<Media>>> {
    if post_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, MediaModel>(
        r#"
        SELECT id, post_id, title, url, created_at
        FROM media
        WHERE post_id = ANY($1)
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await
    .map_err(map_db_error)?;

    let mut grouped: HashMap<i64, Vec<Media>> = HashMap::new();
    for row in rows {
        if let Some(post_id) = row.post_id {
            grouped.entry(post_id).or_default().push(Media::from(row));
        }
    }
    Ok(grouped)
}

/// Media of each collection's items, in item position order
pub(crate) async fn preview_media_by_collection(
    pool: &PgPool,
    collection_ids: &[i64],
) -> RepoResult<HashMap<i64, Vec<Media>>> {
    if collection_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, CollectionItemMediaModel>(
        r#"
        SELECT ci.collection_id, ci.position, m.id AS media_id, m.post_id, m.title, m.url, m.created_at
        FROM collection_items ci
        JOIN media m ON m.id = ci.media_id
        WHERE ci.collection_id = ANY($1)
        ORDER BY ci.collection_id, ci.position ASC
        "#,
    )
    .bind(collection_ids)
    .fetch_all(pool)
    .await
    .map_err(map_db_error)?;

    let mut grouped: HashMap<i64, Vec<Media>> = HashMap::new();
    for row in rows {
        grouped.entry(row.collection_id).or_default().push(Media::from(row));
    }
    Ok(grouped)
}

/// Collections by id, with owner and preview media
pub(crate) async fn collections_by_id(
    pool: &PgPool,
    collection_ids: &[i64],
) -> RepoResult<HashMap<i64, CollectionRecord>> {
    if collection_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!("{COLLECTION_SELECT} WHERE c.id = ANY($1)");
    let rows = sqlx::query_as::<_, CollectionModel>(&query)
        .bind(collection_ids)
        .fetch_all(pool)
        .await
        .map_err(map_db_error)?;

    let mut records = rows
        .into_iter()
        .map(CollectionRecord::try_from)
        .collect::<RepoResult<Vec<_>>>()?;
    attach_preview_media(pool, &mut records).await?;

    Ok(records
        .into_iter()
        .map(|record| (record.collection.id.into_inner(), record))
        .collect())
}

/// Fill `preview_medias` for every record
pub(crate) async fn attach_preview_media(
    pool: &PgPool,
    records: &mut [CollectionRecord],
) -> RepoResult<()> {
    let ids: Vec<i64> = records
        .iter()
        .map(|record| record.collection.id.into_inner())
        .collect();
    let mut previews = preview_media_by_collection(pool, &ids).await?;

    for record in records.iter_mut() {
        record.preview_medias = previews
            .remove(&record.collection.id.into_inner())
            .unwrap_or_default();
    }
    Ok(())
}

/// Posts among `post_ids` that `user_id` liked
pub(crate) async fn likes_by_user(
    pool: &PgPool,
    post_ids: &[i64],
    user_id: i64,
) -> RepoResult<Vec<LikeModel>> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, LikeModel>(
        r#"
        SELECT post_id, user_id
        FROM likes
        WHERE post_id = ANY($1) AND user_id = $2
        "#,
    )
    .bind(post_ids)
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(map_db_error)
}
