use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use axum::{response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: UserSummary,
}

#[utoipa::path(
    get,
    path = "/protected",
    tag = "auth",
    responses(
        (status = 200, description = "The authenticated user", body = ProtectedResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Malformed credential", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn protected(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(ProtectedResponse {
        message: "This is a protected route".to_string(),
        user: UserSummary {
            id: user.id,
            username: user.username,
        },
    })
}
