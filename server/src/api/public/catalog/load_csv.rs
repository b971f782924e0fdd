use crate::api::{error_response, ErrorResponse};
use crate::corpus::CorpusRecord;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/debug_load_csv",
    tag = "catalog",
    responses(
        (status = 200, description = "Every record of the recipe corpus", body = Vec<CorpusRecord>),
        (status = 500, description = "Corpus unreadable", body = ErrorResponse)
    )
)]
pub async fn debug_load_csv(State(ctx): State<AppState>) -> impl IntoResponse {
    match ctx.corpus.load_all() {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            tracing::error!("Failed to load recipe corpus: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read recipe corpus",
            )
        }
    }
}
