//! colorservice HTTP server binary.
//!
//! Starts an axum HTTP server exposing the `/color` resource.
//!
//! # Environment Variables
//!
//! - `HOST` - Bind interface (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 8080)
//! - `COLOR_INITIAL` - Starting color (default: "white")
//! - `COLOR_INDEX_POLICY` - "strict" (default) or "wrap"
//! - `RUST_LOG` - Tracing filter (default: "info,colorservice=debug")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin server
//! ```

use anyhow::Context;
use colorservice::config::ServiceConfig;
use colorservice::server::{app_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,colorservice=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServiceConfig::from_env().context("Failed to load configuration")?;
    let bind_addr = config.bind_addr();

    let state = AppState::from_config(&config);
    let app = app_router(state);

    tracing::info!("colorservice starting on {}", bind_addr);
    tracing::info!(
        initial_color = %config.initial_color,
        index_policy = ?config.index_policy,
        "Configuration loaded"
    );
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                 - liveness probe");
    tracing::info!("  GET  /color                  - current color");
    tracing::info!("  POST /color/:color           - replace color");
    tracing::info!("  GET  /color/object           - color with channels");
    tracing::info!("  GET  /color/compute-emotion  - ?op=&c1=&c2=");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("colorservice stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
