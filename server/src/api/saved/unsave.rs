use crate::api::{error_response, message_response, path_id, ErrorResponse, MessageResponse};
use crate::auth::AuthUser;
use crate::get_conn;
use crate::schema::{recipes, saved_recipes};
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use diesel::prelude::*;

#[utoipa::path(
    delete,
    path = "/unsave_recipe/{recipe_id}",
    tag = "saved",
    params(
        ("recipe_id" = i64, Path, description = "External recipe id")
    ),
    responses(
        (status = 200, description = "Recipe removed from saved list", body = MessageResponse),
        (status = 400, description = "Recipe was not saved", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn unsave_recipe(
    AuthUser(user): AuthUser,
    State(ctx): State<AppState>,
    recipe_id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let recipe_id = match path_id(recipe_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut conn = get_conn!(ctx.pool);

    let recipe_pk: Option<i32> = match recipes::table
        .filter(recipes::recipe_id.eq(recipe_id))
        .select(recipes::id)
        .first(&mut conn)
        .optional()
    {
        Ok(pk) => pk,
        Err(e) => {
            tracing::error!("Failed to look up recipe {}: {}", recipe_id, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to remove recipe");
        }
    };
    let Some(recipe_pk) = recipe_pk else {
        return error_response(StatusCode::NOT_FOUND, "Recipe not found.");
    };

    let deleted = diesel::delete(
        saved_recipes::table
            .filter(saved_recipes::user_id.eq(user.id))
            .filter(saved_recipes::recipe_id.eq(recipe_pk)),
    )
    .execute(&mut conn);

    match deleted {
        Ok(0) => error_response(StatusCode::BAD_REQUEST, "Recipe not saved."),
        Ok(_) => message_response(StatusCode::OK, "Recipe removed successfully!"),
        Err(e) => {
            tracing::error!("Failed to unsave recipe: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to remove recipe")
        }
    }
}
