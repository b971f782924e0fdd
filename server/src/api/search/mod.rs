pub mod autocomplete;
pub mod by_ingredients;
pub mod by_name;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Corpus search and autocomplete
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/search_recipes_by_name",
            get(by_name::search_recipes_by_name),
        )
        .route(
            "/search_recipes_by_ingredients",
            get(by_ingredients::search_recipes_by_ingredients),
        )
        .route(
            "/autocomplete_recipes",
            get(autocomplete::autocomplete_recipes),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        by_name::search_recipes_by_name,
        by_ingredients::search_recipes_by_ingredients,
        autocomplete::autocomplete_recipes,
    ),
    components(schemas(
        by_name::SearchResponse,
        autocomplete::AutocompleteResponse,
        crate::corpus::RecipeHit,
    ))
)]
pub struct ApiDoc;
