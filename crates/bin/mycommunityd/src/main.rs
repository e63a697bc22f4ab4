//! # mycommunityd — mycommunity event registry daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Construct the JSON file event registry (adapter)
//! - Construct the event service, injecting the registry via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use axum::http::HeaderValue;
use tracing_subscriber::EnvFilter;

use mycommunity_adapter_http_axum::state::AppState;
use mycommunity_adapter_storage_json::Config as StorageConfig;
use mycommunity_app::services::event_service::EventService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Storage
    let registry = StorageConfig {
        path: config.storage.path.clone(),
    }
    .build()
    .await
    .context("failed to prepare event storage")?;
    tracing::info!(path = %registry.path().display(), "using event document");

    // Services
    let event_service = EventService::new(registry);

    // HTTP
    let allowed_origin = HeaderValue::from_str(&config.cors.allowed_origin)
        .context("allowed origin is not a valid header value")?;
    let app = mycommunity_adapter_http_axum::router::build(
        AppState::new(event_service),
        allowed_origin,
    );

    let listen = config.server.listen;
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("failed to bind {listen}"))?;
    tracing::info!(%listen, origin = %config.cors.allowed_origin, "mycommunityd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("mycommunityd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
