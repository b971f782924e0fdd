use crate::api::{error_response, ErrorResponse};
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::{recipes, saved_recipes};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/saved_recipes",
    tag = "saved",
    responses(
        (status = 200, description = "Recipes saved by the current user, oldest first", body = Vec<Recipe>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn saved_recipes(
    AuthUser(user): AuthUser,
    State(ctx): State<AppState>,
) -> impl IntoResponse {
    let mut conn = get_conn!(ctx.pool);

    match saved_recipes::table
        .inner_join(recipes::table)
        .filter(saved_recipes::user_id.eq(user.id))
        .order(saved_recipes::id.asc())
        .select(Recipe::as_select())
        .load(&mut conn)
    {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            tracing::error!("Failed to load saved recipes: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load saved recipes",
            )
        }
    }
}
