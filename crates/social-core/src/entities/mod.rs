//! Domain entities - core business objects

mod collection;
mod follow;
mod media;
mod post;
mod user;

pub use collection::{Collection, CollectionRecord};
pub use follow::FollowEdge;
pub use media::Media;
pub use post::{Post, PostRecord};
pub use user::{User, UserSummary};
