use crate::api::{error_response, ErrorResponse};
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;

#[utoipa::path(
    get,
    path = "/list_recipes",
    tag = "catalog",
    responses(
        (status = 200, description = "All stored recipes", body = Vec<Recipe>),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(ctx): State<AppState>) -> impl IntoResponse {
    let mut conn = get_conn!(ctx.pool);

    match recipes::table
        .order(recipes::id.asc())
        .select(Recipe::as_select())
        .load(&mut conn)
    {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            tracing::error!("Failed to list recipes: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to list recipes")
        }
    }
}
