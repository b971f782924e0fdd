pub mod api;
pub mod auth;
pub mod config;
pub mod corpus;
pub mod db;
pub mod models;
pub mod raw_sql;
pub mod schema;
pub mod video;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware;
use axum::Router;
use chrono::Duration;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::PasswordHashing;
use crate::config::Config;
use crate::corpus::{ItemCatalog, RecipeCorpus};
use crate::db::DbPool;
use crate::video::VideoSearch;

/// Everything a handler may need, built once at startup.
pub struct AppContext {
    pub pool: DbPool,
    pub corpus: RecipeCorpus,
    pub items: ItemCatalog,
    /// `None` when no API key is configured.
    pub videos: Option<Arc<dyn VideoSearch>>,
    pub passwords: PasswordHashing,
    pub session_ttl: Duration,
    pub secure_cookies: bool,
}

impl AppContext {
    pub fn from_config(
        config: &Config,
        pool: DbPool,
        videos: Option<Arc<dyn VideoSearch>>,
    ) -> Self {
        let passwords = if config.insecure_password_hashing {
            tracing::warn!("Using insecure password hashing - do not use in production");
            PasswordHashing::Fast
        } else {
            PasswordHashing::Secure
        };

        Self {
            pool,
            corpus: RecipeCorpus::new(&config.food_csv_path, config.image_base_url.clone()),
            items: ItemCatalog::new(&config.item_csv_path),
            videos,
            passwords,
            session_ttl: config.session_ttl,
            secure_cookies: config.secure_cookies,
        }
    }
}

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

/// Check out a pooled connection or return a 500 from the enclosing handler.
#[macro_export]
macro_rules! get_conn {
    ($pool:expr) => {
        match $pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!("Failed to get DB connection: {}", e);
                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json($crate::api::ErrorResponse {
                        error: "Database connection failed".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    };
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_router = api::public::router();

    // Protected routes (auth required)
    let protected_router = Router::new()
        .merge(api::account::router())
        .merge(api::search::router())
        .merge(api::saved::router())
        .merge(api::fridge::router())
        .merge(api::videos::router())
        .merge(api::debug::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .merge(public_router)
        .merge(protected_router)
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &Span| {
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        )
}
