pub mod list_tables;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

pub fn router() -> Router<AppState> {
    Router::new().route("/list_tables", get(list_tables::list_tables))
}

#[derive(OpenApi)]
#[openapi(
    paths(list_tables::list_tables),
    components(schemas(list_tables::TablesResponse))
)]
pub struct ApiDoc;
