//! # social-service
//!
//! Application layer: the feed and search composers, their view models,
//! and the dependency container they run against.

pub mod dto;
pub mod services;

pub use dto::{
    CollectionResponse, HealthChecks, HealthResponse, MediaResponse, OwnerResponse, PageResponse,
    PostResponse, ReadinessResponse, UserSearchResponse,
};
pub use services::{
    AttachmentViewability, FeedService, NoopViewability, SearchService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
