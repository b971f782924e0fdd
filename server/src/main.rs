use anyhow::Context;
use recipebox_server::config::Config;
use recipebox_server::video::{VideoSearch, YouTubeClient};
use recipebox_server::{api, app, db, AppContext, AppState};
use std::env;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Console logging, filtered by RUST_LOG.
fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json()?;
        println!("{}", spec);
        return Ok(());
    }

    init_telemetry();

    let config = Config::from_env()?;
    let pool = db::create_pool(&config.database_url)
        .with_context(|| format!("opening database {}", config.database_url))?;

    let videos: Option<Arc<dyn VideoSearch>> = match &config.youtube_api_key {
        Some(key) => Some(Arc::new(YouTubeClient::new(key.clone())?)),
        None => {
            tracing::warn!("YOUTUBE_API_KEY not set, /youtube_tutorial will return errors");
            None
        }
    };

    let state: AppState = Arc::new(AppContext::from_config(&config, pool, videos));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Server listening on {}", local_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);
    tracing::info!(
        "OpenAPI spec available at http://{}/api-docs/openapi.json",
        local_addr
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}
