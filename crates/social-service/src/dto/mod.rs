//! Data transfer objects for API responses
//!
//! This module provides:
//! - Response DTOs (camelCase JSON) for feeds, search results and health checks
//! - The mapping from domain records to those DTOs, shared by every composer

pub mod mappers;
pub mod responses;

pub use mappers::{post_view, user_view};
pub use responses::{
    CollectionResponse, HealthChecks, HealthResponse, MediaResponse, OwnerResponse, PageResponse,
    PostResponse, ReadinessResponse, UserSearchResponse,
};
