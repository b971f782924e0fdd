use crate::api::ErrorResponse;
use crate::models::User;
use crate::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::cookie::{cookie_value, AUTH_COOKIE};
use super::crypto::is_well_formed_token;
use super::db::find_user_by_token;

/// The raw session token of the current request, for handlers that need to
/// act on the session itself (logout).
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

#[derive(Debug)]
pub enum AuthError {
    MissingCredentials,
    InvalidHeader,
    InvalidFormat,
    MalformedToken,
    InvalidToken,
    ValidationFailed,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingCredentials => {
                (StatusCode::UNAUTHORIZED, "Missing authentication credentials")
            }
            AuthError::InvalidHeader => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid Authorization header",
            ),
            AuthError::InvalidFormat => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid Authorization header format",
            ),
            AuthError::MalformedToken => (StatusCode::UNPROCESSABLE_ENTITY, "Malformed token"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            AuthError::ValidationFailed => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Token validation failed")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Pull the session token from `Authorization: Bearer ...`, falling back to
/// the auth cookie.
fn extract_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let token = if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| AuthError::InvalidHeader)?;
        auth_str
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidFormat)?
            .trim()
            .to_string()
    } else {
        let mut found = None;
        for value in headers.get_all(header::COOKIE) {
            let cookies = value.to_str().map_err(|_| AuthError::InvalidHeader)?;
            if let Some(token) = cookie_value(cookies, AUTH_COOKIE) {
                found = Some(token.to_string());
                break;
            }
        }
        found.ok_or(AuthError::MissingCredentials)?
    };

    if !is_well_formed_token(&token) {
        return Err(AuthError::MalformedToken);
    }
    Ok(token)
}

async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<(User, String), AuthError> {
    let token = extract_token(headers)?;

    let mut conn = state.pool.get().map_err(|e| {
        tracing::error!("Failed to get DB connection for auth: {}", e);
        AuthError::ValidationFailed
    })?;

    let user = find_user_by_token(&mut conn, &token)
        .map_err(|e| {
            tracing::error!("Token lookup failed: {}", e);
            AuthError::ValidationFailed
        })?
        .ok_or(AuthError::InvalidToken)?;

    Ok((user, token))
}

/// Middleware that requires a valid session for all requests.
/// Apply this to routes that should be protected by default. The resolved
/// user is stored in request extensions for the `AuthUser` extractor.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let (user, token) = match authenticate(&state, request.headers()).await {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::debug!(error = ?e, "rejected unauthenticated request");
            return e.into_response();
        }
    };

    request.extensions_mut().insert(user);
    request.extensions_mut().insert(SessionToken(token));

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const TOKEN: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_bearer_header() {
        let map = headers(&[(header::AUTHORIZATION, format!("Bearer {TOKEN}").as_str())]);
        assert_eq!(extract_token(&map).unwrap(), TOKEN);
    }

    #[test]
    fn test_cookie_fallback() {
        let map = headers(&[
            (header::COOKIE, "theme=dark"),
            (header::COOKIE, format!("access_token_cookie={TOKEN}").as_str()),
        ]);
        assert_eq!(extract_token(&map).unwrap(), TOKEN);
    }

    #[test]
    fn test_missing_credentials() {
        assert!(matches!(
            extract_token(&HeaderMap::new()),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            extract_token(&headers(&[(header::COOKIE, "theme=dark")])),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn test_wrong_scheme() {
        let map = headers(&[(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")]);
        assert!(matches!(extract_token(&map), Err(AuthError::InvalidFormat)));
    }

    #[test]
    fn test_malformed_token() {
        let map = headers(&[(header::AUTHORIZATION, "Bearer not-a-token")]);
        assert!(matches!(extract_token(&map), Err(AuthError::MalformedToken)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::MissingCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::MalformedToken.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AuthError::ValidationFailed.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
