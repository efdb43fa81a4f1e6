//! # social-core
//!
//! Domain layer containing entities, value objects, repository traits and the
//! visibility policy engine that decides what a viewer may read.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Collection, CollectionRecord, FollowEdge, Media, Post, PostRecord, User, UserSummary,
};
pub use error::DomainError;
pub use policy::{
    is_friend, partition, Audience, Filter, Filterable, FollowGraph, FollowSet,
    StandardVisibility, TextField, Viewer, VisibilityPolicy,
};
pub use traits::{
    CollectionRepository, FollowRepository, PostRepository, RepoResult, UserRepository,
};
pub use value_objects::{
    Id, IdParseError, Page, PageRequest, PaginationSettings, Privacy, SearchQuery, SortOrder,
};
