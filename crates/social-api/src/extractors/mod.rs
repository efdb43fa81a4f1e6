//! Axum extractors for request handling
//!
//! Custom extractors for viewer authentication, pagination and search input.

mod auth;
mod pagination;
mod search;

pub use auth::AuthUser;
pub use pagination::Paging;
pub use search::SearchParams;
