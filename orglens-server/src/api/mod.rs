//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific concern.

pub mod error;
pub mod greeting;
pub mod health;
pub mod repos;

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use orglens_client::RepositorySource;
use tower_http::trace::TraceLayer;

use crate::auth::{BasicAuthConfig, require_basic_auth};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub repositories: Arc<dyn RepositorySource>,
    pub auth: Arc<BasicAuthConfig>,
}

impl AppState {
    pub fn new(repositories: Arc<dyn RepositorySource>, auth: BasicAuthConfig) -> Self {
        Self {
            repositories,
            auth: Arc::new(auth),
        }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    // Routes behind Basic authentication
    let protected_routes = Router::new()
        .route("/protected", get(greeting::protected))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Greeting
        .route("/hello-world", get(greeting::hello_world))
        // Repository listing
        .route("/repo-list", get(repos::list_repositories_without_org))
        .route("/repo-list/", get(repos::list_repositories_without_org))
        .route("/repo-list/{org_name}", get(repos::list_repositories))
        .merge(protected_routes)
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
