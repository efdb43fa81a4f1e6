//! User model -> entity mapper

use social_core::entities::{User, UserSummary};
use social_core::value_objects::Id;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            username: model.username,
            handle: model.handle,
            avatar: model.avatar,
            bio: model.bio,
            created_at: model.created_at,
        }
    }
}

/// Owner summary from the joined `owner_*` columns
pub(crate) fn owner_summary(
    id: i64,
    username: String,
    handle: String,
    avatar: Option<String>,
) -> UserSummary {
    UserSummary {
        id: Id::new(id),
        username,
        handle,
        avatar,
    }
}
