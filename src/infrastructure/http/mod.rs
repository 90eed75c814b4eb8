pub mod request_id;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    conversion::ConversionController, health, history::HistoryController,
    playback::PlaybackController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::HistoryRepository;
use self::request_id::request_id_middleware;

/// Build the application router with all routes configured
pub fn build_router(
    conversion_controller: Arc<ConversionController>,
    history_controller: Arc<HistoryController>,
    playback_controller: Arc<PlaybackController>,
    history_repo: Arc<dyn HistoryRepository>,
) -> Router {
    let conversion_routes = Router::new()
        .route("/api/conversions", post(ConversionController::convert))
        .route(
            "/api/conversions/state",
            get(ConversionController::get_state),
        )
        .route("/api/voices", get(ConversionController::list_voices))
        .with_state(conversion_controller);

    let history_routes = Router::new()
        .route("/api/history", get(HistoryController::list_entries))
        .route(
            "/api/history/:position",
            delete(HistoryController::remove_entry),
        )
        .with_state(history_controller);

    let playback_routes = Router::new()
        .route("/api/playback", get(PlaybackController::get_playback))
        .route("/api/playback/rate", put(PlaybackController::set_rate))
        .route("/api/playback/asset", get(PlaybackController::get_asset))
        .with_state(playback_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(history_repo)
        .merge(conversion_routes)
        .merge(history_routes)
        .merge(playback_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    conversion_controller: Arc<ConversionController>,
    history_controller: Arc<HistoryController>,
    playback_controller: Arc<PlaybackController>,
    history_repo: Arc<dyn HistoryRepository>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(
        conversion_controller,
        history_controller,
        playback_controller,
        history_repo,
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
