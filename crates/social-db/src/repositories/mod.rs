//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in social-core.
//! List queries translate the caller's filter into the `WHERE` clause, so
//! visibility, search and pagination run as one statement per page.

mod collection;
mod error;
mod follow;
mod loaders;
mod post;
mod user;

pub use collection::PgCollectionRepository;
pub use follow::PgFollowRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
