//! API Server Entry Point
//!
//! Loads the quiz data, then serves the quiz API under `/api` and the
//! static frontend for every other path.
//! Uses `anyhow` for startup errors; request errors are `quiz::QuizError`.

mod config;

use axum::{
    Router, http,
    http::{Method, header},
};
use config::Config;
use quiz::{AnswerMatcher, loader, quiz_router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,quiz=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let catalog = loader::load_catalog(&config.quiz_data_path)?;
    tracing::info!(
        path = %config.quiz_data_path.display(),
        quizzes = catalog.len(),
        "Quiz catalog loaded"
    );

    let synonyms = match &config.synonyms_path {
        Some(path) => loader::load_synonyms(path)?,
        None => loader::default_synonyms()?,
    };
    tracing::info!(entries = synonyms.len(), "Synonym table loaded");

    let app = build_app(
        quiz_router(catalog, AnswerMatcher::new(synonyms), config.quiz.clone()),
        &config,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        max_attempts = config.quiz.max_attempts,
        "Listening on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(api: Router, config: &Config) -> Router {
    let allowed_origins: Vec<http::HeaderValue> = config
        .frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
