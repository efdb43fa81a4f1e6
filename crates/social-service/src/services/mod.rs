//! Business logic services
//!
//! Feed and search composers plus the context and ports they run against.

pub mod context;
pub mod error;
pub mod feed;
mod pages;
pub mod search;
pub mod viewability;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use search::SearchService;
pub use viewability::{AttachmentViewability, NoopViewability};
