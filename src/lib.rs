use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod services;

use config::Config;
use db::mood_log::MoodLogStore;
use services::sentiment::SentimentScorer;

#[derive(Clone)]
pub struct AppState {
    pub store: MoodLogStore,
    pub scorer: SentimentScorer,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, scorer: SentimentScorer) -> Self {
        Self {
            store: MoodLogStore::new(config.mood_log_path.clone()),
            scorer,
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let allowed_origins: Vec<HeaderValue> = std::iter::once(&state.config.frontend_url)
        .chain(state.config.cors_extra_origins.iter())
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(handlers::health::liveness))
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route(
            "/analyze-sentiment",
            post(handlers::analyze::analyze_sentiment),
        )
        .route("/mood-log", get(handlers::mood_log::get_mood_log))
        .route("/mood-log/summary", get(handlers::mood_log::get_mood_summary))
        .route("/mood-log/export", get(handlers::mood_log::export_mood_log))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
