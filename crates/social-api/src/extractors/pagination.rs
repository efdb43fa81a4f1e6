//! Pagination extractor
//!
//! Reads `page`, `perPage` and `order` from the query string. Nothing here
//! can reject a request: unparsable input is left for the pagination
//! calculator to normalize.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use social_core::PageRequest;
use std::convert::Infallible;

/// Raw page request from the query string
#[derive(Debug, Clone, Default)]
pub struct Paging(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Paging
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let request = match Query::<PageRequest>::from_request_parts(parts, state).await {
            Ok(Query(request)) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable paging parameters, using defaults");
                PageRequest::default()
            }
        };

        Ok(Paging(request))
    }
}
