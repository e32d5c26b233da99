//! Greeting API Handlers

use axum::{Extension, Json};
use orglens_core::dto::MessageResponse;

use crate::auth::AuthenticatedIdentity;

/// GET /hello-world
pub async fn hello_world() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}

/// GET /protected
/// Only reachable through the Basic-Auth middleware
pub async fn protected(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Json<MessageResponse> {
    tracing::info!("Protected endpoint accessed by {}", identity.username);

    Json(MessageResponse::new(format!(
        "Login successful for {}",
        identity.username
    )))
}
