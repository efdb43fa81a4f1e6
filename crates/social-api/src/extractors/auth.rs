//! Authentication extractor
//!
//! Extracts and validates the viewer's JWT from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use social_core::Viewer;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated viewer extracted from a JWT
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub viewer: Viewer,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        // a zero subject is not a user
        let viewer = Viewer::new(user_id).map_err(|e| {
            tracing::warn!(error = %e, "Token subject is not a viewer");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser { viewer })
    }
}
