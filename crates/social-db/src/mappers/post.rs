//! Post model -> entity mapper

use social_core::entities::{Post, PostRecord};
use social_core::error::DomainError;
use social_core::value_objects::{Id, Privacy};

use super::user::owner_summary;
use crate::models::PostModel;

impl TryFrom<PostModel> for PostRecord {
    type Error = DomainError;

    fn try_from(model: PostModel) -> Result<Self, Self::Error> {
        let privacy: Privacy = model.privacy.parse()?;

        Ok(PostRecord {
            post: Post {
                id: Id::new(model.id),
                content: model.content,
                privacy,
                owner_id: Id::new(model.owner_id),
                collection_id: model.collection_id.map(Id::new),
                created_at: model.created_at,
            },
            owner: owner_summary(
                model.owner_id,
                model.owner_username,
                model.owner_handle,
                model.owner_avatar,
            ),
            media: Vec::new(),
            collection: None,
            like_count: model.like_count,
            comment_count: model.comment_count,
            liker_ids: Vec::new(),
        })
    }
}
