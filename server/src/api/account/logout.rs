use crate::api::{error_response, ErrorResponse, MessageResponse};
use crate::auth::{delete_session, expired_auth_cookie, SessionToken};
use crate::get_conn;
use crate::AppState;
use axum::{
    extract::{Extension, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session ended, cookie cleared", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn logout(
    State(ctx): State<AppState>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> impl IntoResponse {
    let mut conn = get_conn!(ctx.pool);

    if let Err(e) = delete_session(&mut conn, &token) {
        tracing::error!("Failed to delete session: {}", e);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to log out");
    }

    (
        StatusCode::OK,
        [(header::SET_COOKIE, expired_auth_cookie(ctx.secure_cookies))],
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
        .into_response()
}
