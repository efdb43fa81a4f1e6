//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CollectionRepository, FollowRepository, PostRepository, RepoResult, UserRepository,
};
