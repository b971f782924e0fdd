use crate::api::{error_response, path_id, ErrorResponse};
use crate::auth::AuthUser;
use crate::get_conn;
use crate::schema::{recipes, saved_recipes};
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::dsl::exists;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct IsSavedResponse {
    pub saved: bool,
}

#[utoipa::path(
    get,
    path = "/is_recipe_saved/{recipe_id}",
    tag = "saved",
    params(
        ("recipe_id" = i64, Path, description = "External recipe id")
    ),
    responses(
        (status = 200, description = "Whether the current user saved the recipe", body = IsSavedResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn is_recipe_saved(
    AuthUser(user): AuthUser,
    State(ctx): State<AppState>,
    recipe_id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let recipe_id = match path_id(recipe_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut conn = get_conn!(ctx.pool);

    // An unknown recipe simply isn't saved
    let saved = diesel::select(exists(
        saved_recipes::table
            .inner_join(recipes::table)
            .filter(saved_recipes::user_id.eq(user.id))
            .filter(recipes::recipe_id.eq(recipe_id)),
    ))
    .get_result::<bool>(&mut conn);

    match saved {
        Ok(saved) => Json(IsSavedResponse { saved }).into_response(),
        Err(e) => {
            tracing::error!("Failed to check saved recipe: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to check saved recipe",
            )
        }
    }
}
