pub mod tutorial;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

pub fn router() -> Router<AppState> {
    Router::new().route("/youtube_tutorial", get(tutorial::youtube_tutorial))
}

#[derive(OpenApi)]
#[openapi(
    paths(tutorial::youtube_tutorial),
    components(schemas(tutorial::TutorialResponse))
)]
pub struct ApiDoc;
