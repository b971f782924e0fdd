use crate::models::User;
use axum::{extract::FromRequestParts, http::request::Parts};

use super::middleware::AuthError;

/// Extractor that provides the authenticated user.
///
/// The user is resolved once by `require_auth`; use this in any handler
/// mounted behind that middleware:
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> impl IntoResponse {
///     // user is the authenticated User
/// }
/// ```
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(AuthUser)
            .ok_or(AuthError::MissingCredentials)
    }
}
