pub mod auth;
pub mod catalog;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints (no auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register::register))
        .route("/login", post(auth::login::login))
        .route("/debug_load_csv", get(catalog::load_csv::debug_load_csv))
        .route("/list_recipes", get(catalog::list::list_recipes))
        .route(
            "/recipe_details_csv",
            get(catalog::details::recipe_details_csv),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register::register,
        auth::login::login,
        catalog::load_csv::debug_load_csv,
        catalog::list::list_recipes,
        catalog::details::recipe_details_csv,
    ),
    components(schemas(
        auth::register::RegisterRequest,
        auth::login::LoginRequest,
        auth::login::LoginResponse,
        catalog::details::RecipeDetailsResponse,
        crate::corpus::CorpusRecord,
        crate::corpus::RecipeHit,
        crate::models::Recipe,
    ))
)]
pub struct ApiDoc;
