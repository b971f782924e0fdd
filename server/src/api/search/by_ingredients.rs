use super::by_name::SearchResponse;
use crate::api::{error_response, ErrorResponse};
use crate::corpus::parse_ingredient_terms;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngredientSearchParams {
    /// Comma-separated ingredient terms; every term must match
    #[serde(default)]
    pub ingredients: String,
}

#[utoipa::path(
    get,
    path = "/search_recipes_by_ingredients",
    tag = "search",
    params(IngredientSearchParams),
    responses(
        (status = 200, description = "Corpus records containing every term", body = SearchResponse),
        (status = 400, description = "No usable ingredient terms", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn search_recipes_by_ingredients(
    State(ctx): State<AppState>,
    Query(params): Query<IngredientSearchParams>,
) -> impl IntoResponse {
    // " , ," would otherwise match every record
    if parse_ingredient_terms(&params.ingredients).is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No ingredients provided.");
    }

    match ctx.corpus.search_by_ingredients(&params.ingredients) {
        Ok(hits) => Json(SearchResponse::from(hits)).into_response(),
        Err(e) => {
            tracing::error!("Ingredient search failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read recipe corpus",
            )
        }
    }
}
