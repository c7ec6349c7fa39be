//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use analysis::{AnalysisConfig, analysis_router};
use axum::{Router, routing::get};
use cipher::{CipherConfig, cipher_router};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod health;
mod static_assets;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

fn build_router(cipher_config: CipherConfig, analysis_config: AnalysisConfig) -> Router {
    Router::new()
        .merge(cipher_router(cipher_config))
        .merge(analysis_router(analysis_config))
        .route("/health", get(health::health_check))
        .fallback(static_assets::serve_embedded_asset)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,cipher=info,analysis=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Upload cap, overridable for local testing
    let upload_limit_bytes = env::var("UPLOAD_LIMIT_BYTES")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(AnalysisConfig::DEFAULT_UPLOAD_LIMIT_BYTES);

    let analysis_config = AnalysisConfig { upload_limit_bytes };
    let cipher_config = CipherConfig::default();

    let app = build_router(cipher_config, analysis_config).layer(TraceLayer::new_for_http());

    // Start server; 5000 is the port the puzzle has always run on
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
