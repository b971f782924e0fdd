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

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DetailsParams {
    /// Exact recipe title, case-insensitive
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeDetailsResponse {
    pub recipe: RecipeHit,
}

#[utoipa::path(
    get,
    path = "/recipe_details_csv",
    tag = "catalog",
    params(DetailsParams),
    responses(
        (status = 200, description = "Matching corpus record", body = RecipeDetailsResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 404, description = "No recipe with that name", body = ErrorResponse)
    )
)]
pub async fn recipe_details_csv(
    State(ctx): State<AppState>,
    Query(params): Query<DetailsParams>,
) -> impl IntoResponse {
    if params.name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Recipe name is required");
    }

    match ctx.corpus.find_by_name(&params.name) {
        Ok(Some(recipe)) => Json(RecipeDetailsResponse { recipe }).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            "No recipe found with the given name.",
        ),
        Err(e) => {
            tracing::error!("Failed to read recipe corpus: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read recipe corpus",
            )
        }
    }
}
