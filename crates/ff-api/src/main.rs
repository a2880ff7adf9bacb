//! FastFun RC RFQ Endpoint Server

mod db;
mod routes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use db::{LeadStore, PgLeadStore};
use ff_core::{rfq::SubmitThrottle, Clock, SystemClock};
use sqlx::postgres::PgPoolOptions;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers
pub struct AppState {
    /// `None` runs the endpoint in fallback-only mode
    pub leads: Option<Arc<dyn LeadStore>>,
    pub clock: Arc<dyn Clock>,
    /// Last accepted submission per email address
    pub recent: Mutex<HashMap<String, SubmitThrottle>>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(leads: Option<Arc<dyn LeadStore>>, clock: Arc<dyn Clock>, config: ApiConfig) -> Self {
        Self {
            leads,
            clock,
            recent: Mutex::new(HashMap::new()),
            config,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub database_url: Option<String>,
    pub max_body_bytes: usize,
    pub duplicate_window_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            database_url: std::env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            max_body_bytes: std::env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(64 * 1024), // 64KB
            duplicate_window_ms: ff_core::rfq::RESUBMIT_WINDOW_MS,
        }
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Build the router around shared state
pub fn app(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        // Health check
        .route("/health", get(routes::health_check))

        // Lead capture
        .route("/api/rfq", post(routes::rfq::submit_rfq))

        .layer(DefaultBodyLimit::max(max_body_bytes))

        // CORS
        .layer(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any))

        // Tracing
        .layer(TraceLayer::new_for_http())

        // State
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ff_api=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FastFun RC RFQ server");

    let config = ApiConfig::default();

    let leads: Option<Arc<dyn LeadStore>> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(url)
                .await?;
            info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Database migrations complete");

            Some(Arc::new(PgLeadStore::new(pool)) as Arc<dyn LeadStore>)
        }
        None => {
            warn!("DATABASE_URL not set; every RFQ will be answered with a mailto fallback");
            None
        }
    };

    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(leads, Arc::new(SystemClock), config));

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
