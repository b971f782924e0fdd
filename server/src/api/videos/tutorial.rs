use crate::api::{error_response, ErrorResponse};
use crate::video::embed_url;
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
pub struct TutorialParams {
    /// Dish or technique to find a tutorial for
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TutorialResponse {
    /// Embeddable player URL, empty when nothing matched
    pub youtube_url: String,
}

#[utoipa::path(
    get,
    path = "/youtube_tutorial",
    tag = "videos",
    params(TutorialParams),
    responses(
        (status = 200, description = "Best matching tutorial video", body = TutorialResponse),
        (status = 400, description = "Missing query", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Video search not configured", body = ErrorResponse),
        (status = 502, description = "Video search failed", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn youtube_tutorial(
    State(ctx): State<AppState>,
    Query(params): Query<TutorialParams>,
) -> impl IntoResponse {
    let query = params.query.trim();
    if query.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Query parameter is required.");
    }

    let Some(videos) = ctx.videos.as_ref() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "YouTube API key not configured.",
        );
    };

    match videos.first_video_id(&format!("{} tutorial", query)).await {
        Ok(video_id) => Json(TutorialResponse {
            youtube_url: video_id.as_deref().map(embed_url).unwrap_or_default(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Video search failed for {:?}: {}", query, e);
            error_response(StatusCode::BAD_GATEWAY, "Video search failed")
        }
    }
}
