use crate::api::{error_response, ErrorResponse};
use crate::auth::{auth_cookie, create_session};
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// Session token, also set as the `access_token_cookie` cookie.
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginRequest, example = json!({"email": "cook@example.com", "password": "password"})),
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(ctx): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (Some(email), Some(password)) = (
        req.email.as_deref().map(str::trim).filter(|e| !e.is_empty()),
        req.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return error_response(StatusCode::BAD_REQUEST, "Email and password are required.");
    };

    let mut conn = get_conn!(ctx.pool);

    let user: Option<User> = match users::table
        .filter(users::email.eq(email))
        .select(User::as_select())
        .first(&mut conn)
        .optional()
    {
        Ok(u) => u,
        Err(e) => {
            tracing::error!("Failed to look up user: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Login failed");
        }
    };

    let user = match user {
        Some(u) if ctx.passwords.verify(password, &u.password_hash) => u,
        _ => return error_response(StatusCode::UNAUTHORIZED, "Invalid credentials."),
    };

    let token = match create_session(&mut conn, user.id, ctx.session_ttl) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to create session: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create session",
            );
        }
    };

    let cookie = auth_cookie(&token, ctx.session_ttl, ctx.secure_cookies);
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful!".to_string(),
            token,
        }),
    )
        .into_response()
}
