use crate::api::{error_response, message_response, path_id, ErrorResponse, MessageResponse};
use crate::auth::AuthUser;
use crate::get_conn;
use crate::schema::fridge_items;
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use diesel::prelude::*;

#[utoipa::path(
    post,
    path = "/fridge/delete/{item_id}",
    tag = "fridge",
    params(
        ("item_id" = i32, Path, description = "Fridge item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found or not owned by the caller", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn delete_fridge_item(
    AuthUser(user): AuthUser,
    State(ctx): State<AppState>,
    item_id: Result<Path<i32>, PathRejection>,
) -> impl IntoResponse {
    let item_id = match path_id(item_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut conn = get_conn!(ctx.pool);

    let deleted = diesel::delete(
        fridge_items::table
            .filter(fridge_items::id.eq(item_id))
            .filter(fridge_items::user_id.eq(user.id)),
    )
    .execute(&mut conn);

    match deleted {
        Ok(0) => error_response(StatusCode::NOT_FOUND, "Item not found or not yours"),
        Ok(_) => message_response(StatusCode::OK, "Item deleted successfully!"),
        Err(e) => {
            tracing::error!("Failed to delete fridge item {}: {}", item_id, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete fridge item",
            )
        }
    }
}
