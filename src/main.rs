use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicepad_backend::controllers::conversion::ConversionController;
use voicepad_backend::controllers::history::HistoryController;
use voicepad_backend::controllers::playback::PlaybackController;
use voicepad_backend::domain::conversion::{ConversionService, ConversionSettings};
use voicepad_backend::domain::history::HistoryService;
use voicepad_backend::domain::playback::PlaybackService;
use voicepad_backend::infrastructure::config::{Config, LogFormat};
use voicepad_backend::infrastructure::http::start_http_server;
use voicepad_backend::infrastructure::repositories::{
    FileHistoryRepository, HistoryRepository, OpenAiSummarizerRepository, PollyTtsRepository,
    SummarizerRepository, TtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Voicepad Backend on {}:{}",
        config.host,
        config.port
    );

    // Create AWS Polly client
    tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);

    // Check for AWS credentials in environment (for debugging)
    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    tracing::info!(
        has_access_key_id = has_access_key,
        has_secret_access_key = has_secret_key,
        "AWS credentials environment check"
    );

    if !has_access_key || !has_secret_key {
        tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
    }

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    tracing::info!("AWS Polly client initialized successfully");

    // Create OpenAI client for the summarizer
    if std::env::var("OPENAI_API_KEY").is_err() {
        tracing::warn!("OPENAI_API_KEY not set. Conversions over the length threshold will fail at the summarization step");
    }
    let openai_client = Arc::new(async_openai::Client::new());

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (boundary adapters)
    tracing::info!("Instantiating repositories...");
    let tts_repo: Arc<dyn TtsRepository> = Arc::new(PollyTtsRepository::new(polly_client));
    let summarizer_repo: Arc<dyn SummarizerRepository> = Arc::new(
        OpenAiSummarizerRepository::new(openai_client, config.summarizer_model.clone()),
    );
    let history_repo: Arc<dyn HistoryRepository> =
        Arc::new(FileHistoryRepository::new(config.history_path.clone()));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    // durable history is read exactly once, at startup
    let history_service = Arc::new(
        HistoryService::load(history_repo.clone())
            .await
            .map_err(|e| e.to_string())?,
    );
    let playback_service = Arc::new(PlaybackService::new());
    let conversion_service = Arc::new(ConversionService::new(
        tts_repo,
        summarizer_repo,
        history_service.clone(),
        ConversionSettings {
            chunk_size: config.chunk_size,
            over_length_threshold: config.over_length_threshold,
            max_text_chars: config.max_text_chars,
            synthesis_concurrency: config.synthesis_concurrency,
        },
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let conversion_controller = Arc::new(ConversionController::new(
        conversion_service,
        playback_service.clone(),
    ));
    let history_controller = Arc::new(HistoryController::new(history_service));
    let playback_controller = Arc::new(PlaybackController::new(playback_service));

    // Start HTTP server with all routes
    start_http_server(
        config,
        conversion_controller,
        history_controller,
        playback_controller,
        history_repo,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicepad_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicepad_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
