use crate::api::{error_response, ErrorResponse};
use crate::corpus::RecipeHit;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub recipes: Vec<RecipeHit>,
    pub count: usize,
}

impl From<Vec<RecipeHit>> for SearchResponse {
    fn from(recipes: Vec<RecipeHit>) -> Self {
        Self {
            count: recipes.len(),
            recipes,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameSearchParams {
    /// Substring of the recipe title, case-insensitive
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/search_recipes_by_name",
    tag = "search",
    params(NameSearchParams),
    responses(
        (status = 200, description = "Corpus records whose title contains the query", body = SearchResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn search_recipes_by_name(
    State(ctx): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> impl IntoResponse {
    let name = params.name.trim();
    if name.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No recipe name provided.");
    }

    match ctx.corpus.search_by_name(name) {
        Ok(hits) => Json(SearchResponse::from(hits)).into_response(),
        Err(e) => {
            tracing::error!("Recipe name search failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read recipe corpus",
            )
        }
    }
}
