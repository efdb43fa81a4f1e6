//! Database models - SQLx-compatible structs for PostgreSQL rows

mod collection;
mod media;
mod post;
mod user;

pub use collection::{CollectionItemMediaModel, CollectionModel};
pub use media::MediaModel;
pub use post::{LikeModel, PostModel};
pub use user::UserModel;
