use crate::api::{error_response, ErrorResponse};
use crate::get_conn;
use crate::raw_sql;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/list_tables",
    tag = "debug",
    responses(
        (status = 200, description = "Application tables in the store", body = TablesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn list_tables(State(ctx): State<AppState>) -> impl IntoResponse {
    let mut conn = get_conn!(ctx.pool);

    match raw_sql::list_tables(&mut conn) {
        Ok(tables) => Json(TablesResponse { tables }).into_response(),
        Err(e) => {
            tracing::error!("Failed to list tables: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to list tables")
        }
    }
}
