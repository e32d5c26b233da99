//! Orglens Server
//!
//! Small HTTP API offering:
//! - a static greeting
//! - a greeting behind HTTP Basic authentication
//! - a proxy listing a GitHub organization's repositories, optionally
//!   filtered by name

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use orglens_client::GitHubClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod auth;
pub mod config;
pub mod service;

use crate::api::AppState;
use crate::auth::BasicAuthConfig;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "orglens_server=debug,orglens_client=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Orglens Server...");

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let github = GitHubClient::new(config.github_api_url.clone(), config.github_timeout())
        .context("Failed to build GitHub client")?
        .with_token(config.github_token.clone());

    tracing::info!(
        "GitHub client ready: url={}, timeout={:?}",
        github.base_url(),
        config.github_timeout()
    );
    if !github.is_authenticated() {
        tracing::warn!("GITHUB_TOKEN not set, using the unauthenticated rate limit");
    }

    let auth = BasicAuthConfig::new(config.auth_username.clone(), config.auth_password.clone());
    if !auth.is_configured() {
        tracing::warn!("AUTH_USERNAME/AUTH_PASSWORD not set, GET /protected will answer 500");
    }

    // Build router with all API endpoints
    let app = api::create_router(AppState::new(Arc::new(github), auth));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    tracing::info!("Listening on {}", config.bind_addr);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET /health");
    tracing::info!("  GET /hello-world");
    tracing::info!("  GET /repo-list/{{org_name}}[?repo_filter=filter]");
    tracing::info!("  GET /protected (requires AUTH_USERNAME and AUTH_PASSWORD)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
