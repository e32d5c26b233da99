//! HTTP Basic authentication
//!
//! Middleware guarding the protected routes. Expected credentials are loaded
//! once at startup and carried in [`AppState`].

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::api::AppState;

const WWW_AUTHENTICATE_VALUE: &str = r#"Basic realm="Restricted""#;

/// Expected Basic-Auth credentials
///
/// Empty values count as unconfigured.
#[derive(Clone, Default)]
pub struct BasicAuthConfig {
    username: Option<String>,
    password: Option<String>,
}

impl BasicAuthConfig {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self {
            username: username.filter(|u| !u.is_empty()),
            password: password.filter(|p| !p.is_empty()),
        }
    }

    /// Both expected values, if both are configured
    fn expected(&self) -> Option<(&str, &str)> {
        Some((self.username.as_deref()?, self.password.as_deref()?))
    }

    pub fn is_configured(&self) -> bool {
        self.expected().is_some()
    }
}

impl std::fmt::Debug for BasicAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Username of a request that passed Basic authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub username: String,
}

/// Basic authentication middleware
///
/// Inserts an [`AuthenticatedIdentity`] into the request extensions on success.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some((username, password)) = basic_credentials(request.headers()) else {
        return unauthorized("Unauthorized");
    };

    let Some(expected) = state.auth.expected() else {
        tracing::error!("Basic authentication requested but AUTH_USERNAME/AUTH_PASSWORD are not set");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Server configuration error").into_response();
    };

    if !credentials_match(expected, &username, &password) {
        tracing::warn!("Rejected Basic credentials for user {}", username);
        return unauthorized("Incorrect username or password");
    }

    request
        .extensions_mut()
        .insert(AuthenticatedIdentity { username });

    next.run(request).await
}

fn unauthorized(message: &'static str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, WWW_AUTHENTICATE_VALUE)],
        message,
    )
        .into_response()
}

/// Decode `Authorization: Basic base64(user:pass)`
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let encoded = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Basic ")?;

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

/// Compare both values in constant time, independently of each other
fn credentials_match(expected: (&str, &str), username: &str, password: &str) -> bool {
    let (expected_username, expected_password) = expected;
    let username_match = constant_time_eq(username.as_bytes(), expected_username.as_bytes());
    let password_match = constant_time_eq(password.as_bytes(), expected_password.as_bytes());
    username_match & password_match
}

/// Constant-time byte comparison; only the length leaks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
