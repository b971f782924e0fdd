pub mod is_saved;
pub mod list;
pub mod save;
pub mod unsave;

use crate::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use utoipa::OpenApi;

/// Per-user saved recipes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save_recipe", post(save::save_recipe))
        .route("/unsave_recipe/{recipe_id}", delete(unsave::unsave_recipe))
        .route("/saved_recipes", get(list::saved_recipes))
        .route("/is_recipe_saved/{recipe_id}", get(is_saved::is_recipe_saved))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        save::save_recipe,
        unsave::unsave_recipe,
        list::saved_recipes,
        is_saved::is_recipe_saved,
    ),
    components(schemas(
        save::SaveRecipeRequest,
        is_saved::IsSavedResponse,
        crate::models::Recipe,
    ))
)]
pub struct ApiDoc;
