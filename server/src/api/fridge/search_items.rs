use crate::api::{error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemSearchParams {
    /// Substring of the catalog item name, case-insensitive
    #[serde(default)]
    pub q: String,
}

/// Keyword to the variants listed for it in the catalog, e.g.
/// `{"Milk": ["whole", "skim"]}`. Items without a variant map to `[""]`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ItemMatches(pub BTreeMap<String, Vec<String>>);

#[utoipa::path(
    get,
    path = "/fridge/search_items_fridge",
    tag = "fridge",
    params(ItemSearchParams),
    responses(
        (status = 200, description = "Matching catalog items grouped by keyword", body = ItemMatches),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn search_items_fridge(
    State(ctx): State<AppState>,
    Query(params): Query<ItemSearchParams>,
) -> impl IntoResponse {
    match ctx.items.search(&params.q) {
        Ok(matches) => Json(ItemMatches(matches)).into_response(),
        Err(e) => {
            tracing::error!("Item catalog search failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read item catalog",
            )
        }
    }
}
