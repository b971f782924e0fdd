pub mod logout;
pub mod protected;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Session endpoints for an already authenticated user
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout::logout))
        .route("/protected", get(protected::protected))
}

#[derive(OpenApi)]
#[openapi(
    paths(logout::logout, protected::protected),
    components(schemas(protected::ProtectedResponse, protected::UserSummary))
)]
pub struct ApiDoc;
