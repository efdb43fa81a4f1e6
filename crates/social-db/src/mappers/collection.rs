//! Collection model -> entity mapper

use social_core::entities::{Collection, CollectionRecord};
use social_core::error::DomainError;
use social_core::value_objects::{Id, Privacy};

use super::user::owner_summary;
use crate::models::CollectionModel;

impl TryFrom<CollectionModel> for CollectionRecord {
    type Error = DomainError;

    fn try_from(model: CollectionModel) -> Result<Self, Self::Error> {
        let privacy: Privacy = model.privacy.parse()?;

        Ok(CollectionRecord {
            collection: Collection {
                id: Id::new(model.id),
                name: model.name,
                description: model.description,
                photo: model.photo,
                privacy,
                owner_id: Id::new(model.owner_id),
                created_at: model.created_at,
            },
            owner: owner_summary(
                model.owner_id,
                model.owner_username,
                model.owner_handle,
                model.owner_avatar,
            ),
            preview_medias: Vec::new(),
        })
    }
}
