use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method, Request},
    routing::{get, post},
    Router,
};
use clap::Parser;
use dotenvy::dotenv;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

use error::ApiError;
use handlers::{health, jobs, matches, parse_wire_label, resume};
use jg_core::logging::{init_tracing, install_panic_hook};
use jg_core::schema::{JobSource, WorkMode};
use jg_core::sources::{affinda, remotive, AffindaParser, JobFeed, RemotiveFeed, ResumeParser};
use state::{AppState, SharedState};

// Résumé PDFs easily exceed axum's default body limit.
const RESUME_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;
const SHUTDOWN_DRAIN_GRACE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Parser)]
#[command(name = "jg-api", about = "HTTP facade for the jobgrid matching engine")]
struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// Job feed endpoint
    #[arg(long, env = "JG_FEED_BASE_URL", default_value = remotive::DEFAULT_BASE_URL)]
    feed_base_url: String,

    /// Provenance tag stamped on normalized jobs
    #[arg(long, env = "JG_FEED_SOURCE", default_value = "Other")]
    feed_source: String,

    /// Work mode assumed when a posting carries no hint of its own
    #[arg(long, env = "JG_DEFAULT_WORK_MODE", default_value = "Remote")]
    default_work_mode: String,

    /// Résumé parser endpoint
    #[arg(long, env = "JG_PARSER_URL", default_value = affinda::DEFAULT_BASE_URL)]
    parser_url: String,

    /// Résumé parser API key
    #[arg(long, env = "JG_PARSER_KEY")]
    parser_key: String,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "JG_CORS_ORIGINS", default_value = "http://localhost:5173")]
    cors_origins: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub feed_base_url: String,
    pub feed_source: JobSource,
    pub default_work_mode: WorkMode,
    pub parser_url: String,
    pub parser_key: String,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    fn from_cli(cli: Cli) -> Result<Self, ApiError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();
        if cors_origins.is_empty() {
            return Err(ApiError::BadRequest(
                "JG_CORS_ORIGINS must list at least one origin".into(),
            ));
        }

        let feed_source = parse_wire_label("JG_FEED_SOURCE", cli.feed_source.trim())?;
        let default_work_mode =
            parse_wire_label("JG_DEFAULT_WORK_MODE", cli.default_work_mode.trim())?;

        Ok(Self {
            port: cli.port,
            feed_base_url: cli.feed_base_url,
            feed_source,
            default_work_mode,
            parser_url: cli.parser_url,
            parser_key: cli.parser_key,
            cors_origins,
        })
    }

    pub fn for_tests() -> Self {
        Self {
            port: 4000,
            feed_base_url: "http://feed.invalid".into(),
            feed_source: JobSource::Other,
            default_work_mode: WorkMode::Remote,
            parser_url: "http://parser.invalid".into(),
            parser_key: "test-key".into(),
            cors_origins: vec!["http://localhost:5173".into()],
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    let api_routes = Router::new()
        .route("/jobs", get(jobs::list_jobs))
        .route("/resume", post(resume::parse_resume))
        .route("/match", post(matches::score_match));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(RESUME_UPLOAD_LIMIT))
        .layer(trace)
        .layer(cors)
        .with_state(state)
}

/// State wired to caller-supplied collaborators, for router-level tests.
pub fn test_state(feed: Arc<dyn JobFeed>, parser: Arc<dyn ResumeParser>) -> SharedState {
    AppState::new(AppConfig::for_tests(), feed, parser)
}

pub async fn run() -> Result<(), ApiError> {
    dotenv().ok();
    init_tracing(env!("CARGO_PKG_NAME"));
    install_panic_hook(env!("CARGO_PKG_NAME"));

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;

    let feed = Arc::new(RemotiveFeed::new(config.feed_base_url.clone()));
    let parser = Arc::new(AffindaParser::new(
        config.parser_url.clone(),
        config.parser_key.clone(),
    ));
    let state = AppState::new(config.clone(), feed, parser);

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state.clone());

    info!(
        %addr,
        feed = %config.feed_base_url,
        source = config.feed_source.as_str(),
        "jg-api listening"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(())
}

async fn shutdown_signal(state: SharedState) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state
        .readiness
        .store(false, std::sync::atomic::Ordering::SeqCst);

    // Give load balancers a moment to observe /health as draining before the
    // listener stops accepting connections.
    tokio::time::sleep(SHUTDOWN_DRAIN_GRACE).await;
}
