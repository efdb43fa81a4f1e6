//! Media model -> entity mapper

use social_core::entities::Media;
use social_core::value_objects::Id;

use crate::models::{CollectionItemMediaModel, MediaModel};

impl From<MediaModel> for Media {
    fn from(model: MediaModel) -> Self {
        Media {
            id: Id::new(model.id),
            post_id: model.post_id.map(Id::new),
            title: model.title,
            url: model.url,
            created_at: model.created_at,
        }
    }
}

impl From<CollectionItemMediaModel> for Media {
    fn from(model: CollectionItemMediaModel) -> Self {
        Media {
            id: Id::new(model.media_id),
            post_id: model.post_id.map(Id::new),
            title: model.title,
            url: model.url,
            created_at: model.created_at,
        }
    }
}
