//! GitHub organization repository listing

use std::time::Duration;

use async_trait::async_trait;
use orglens_core::domain::repository::RepositoryRecord;
use reqwest::{Client, StatusCode, Url, header};

use crate::error::{Result, UpstreamError};
use crate::source::RepositorySource;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Upper bound for a single upstream call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client identifier sent as `User-Agent`; GitHub rejects requests without one
pub const USER_AGENT: &str = concat!("orglens/", env!("CARGO_PKG_VERSION"));

/// Media type for the v3 JSON API
pub const ACCEPT_GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// HTTP client for the GitHub organization repositories endpoint
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// Base URL of the API (e.g., "https://api.github.com")
    base_url: String,
    /// Optional personal access token, raises the upstream rate limit
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl GitHubClient {
    /// Create a new client whose every request is bounded by `timeout`
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the GitHub API
    /// * `timeout` - Total time allowed for a request, body included
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a new client with a custom HTTP client
    ///
    /// The caller is responsible for configuring a timeout on `client`.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        }
    }

    /// Attach an access token sent as `Authorization: token <value>`
    ///
    /// Empty tokens are ignored and requests stay unauthenticated.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an access token
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `<base>/orgs/{organization}/repos`, with the organization encoded as
    /// a single path segment
    fn repos_url(&self, organization: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            UpstreamError::InvalidRequest(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                UpstreamError::InvalidRequest(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["orgs", organization, "repos"]);

        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Classify the upstream status and decode the body
    ///
    /// Takes the response by value so it is released on every return path.
    async fn handle_response(
        &self,
        organization: &str,
        response: reqwest::Response,
    ) -> Result<Vec<RepositoryRecord>> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(organization.to_string()));
        }

        if status != StatusCode::OK {
            return Err(UpstreamError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Unreachable(e.to_string())
            } else {
                UpstreamError::MalformedResponse(format!("Failed to read response body: {}", e))
            }
        })?;

        serde_json::from_slice(&body).map_err(|e| UpstreamError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn fetch_repositories(&self, organization: &str) -> Result<Vec<RepositoryRecord>> {
        let url = self.repos_url(organization)?;
        tracing::debug!("Fetching repositories from {}", url);

        let mut request = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, ACCEPT_GITHUB_JSON);

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        tracing::debug!(
            "Upstream answered {} for organization {}",
            response.status(),
            organization
        );

        self.handle_response(organization, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::{HeaderMap, HeaderName},
        routing::get,
    };
    use serde_json::json;

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: &str) -> GitHubClient {
        GitHubClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    fn header_value(headers: &HeaderMap, name: HeaderName) -> String {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = client_for("https://api.github.com/");
        assert_eq!(client.base_url(), "https://api.github.com");
    }

    #[test]
    fn test_repos_url() {
        let client = client_for(DEFAULT_API_URL);
        let url = client.repos_url("golang").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/orgs/golang/repos");
    }

    #[test]
    fn test_repos_url_keeps_base_path_and_encodes_segment() {
        let client = client_for("https://ghe.example.com/api/v3");
        let url = client.repos_url("a b/c").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/orgs/a%20b%2Fc/repos"
        );
    }

    #[test]
    fn test_repos_url_rejects_unusable_base() {
        let client = client_for("not a url");
        assert!(matches!(
            client.repos_url("golang"),
            Err(UpstreamError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = client_for(DEFAULT_API_URL).with_token(Some(String::new()));
        assert!(!client.is_authenticated());

        let client = client_for(DEFAULT_API_URL).with_token(Some("ghp_x".to_string()));
        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn test_fetch_decodes_records_in_order() {
        let router = Router::new().route(
            "/orgs/{org}/repos",
            get(|| async {
                Json(json!([
                    {"name": "go", "stargazers_count": 100, "fork": false},
                    {"name": "goland", "stargazers_count": 5, "description": null}
                ]))
            }),
        );
        let base_url = spawn_upstream(router).await;

        let records = client_for(&base_url)
            .fetch_repositories("golang")
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "go");
        assert_eq!(records[0].stargazers_count, 100);
        assert_eq!(records[1].name, "goland");
        assert_eq!(records[1].description, "");
    }

    #[tokio::test]
    async fn test_fetch_sends_required_headers() {
        let router = Router::new().route(
            "/orgs/{org}/repos",
            get(|Path(org): Path<String>, headers: HeaderMap| async move {
                Json(json!([{
                    "name": org,
                    "full_name": header_value(&headers, axum::http::header::USER_AGENT),
                    "description": header_value(&headers, axum::http::header::ACCEPT),
                    "language": header_value(&headers, axum::http::header::AUTHORIZATION),
                }]))
            }),
        );
        let base_url = spawn_upstream(router).await;

        let anonymous = client_for(&base_url)
            .fetch_repositories("my org")
            .await
            .unwrap();
        assert_eq!(anonymous[0].name, "my org");
        assert_eq!(anonymous[0].full_name, USER_AGENT);
        assert_eq!(anonymous[0].description, ACCEPT_GITHUB_JSON);
        assert_eq!(anonymous[0].language, "");

        let authenticated = client_for(&base_url)
            .with_token(Some("secret".to_string()))
            .fetch_repositories("acme")
            .await
            .unwrap();
        assert_eq!(authenticated[0].language, "token secret");
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let router = Router::new().route(
            "/orgs/{org}/repos",
            get(|| async { axum::http::StatusCode::NOT_FOUND }),
        );
        let base_url = spawn_upstream(router).await;

        let err = client_for(&base_url)
            .fetch_repositories("acme")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, UpstreamError::NotFound(name) if name == "acme"));
    }

    #[tokio::test]
    async fn test_fetch_bad_status() {
        let router = Router::new()
            .route(
                "/orgs/limited/repos",
                get(|| async { axum::http::StatusCode::FORBIDDEN }),
            )
            .route(
                "/orgs/broken/repos",
                get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
            );
        let base_url = spawn_upstream(router).await;
        let client = client_for(&base_url);

        let err = client.fetch_repositories("limited").await.unwrap_err();
        assert!(matches!(err, UpstreamError::BadStatus(403)));

        let err = client.fetch_repositories("broken").await.unwrap_err();
        assert!(matches!(err, UpstreamError::BadStatus(500)));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let router = Router::new()
            .route("/orgs/text/repos", get(|| async { "definitely not json" }))
            .route(
                "/orgs/object/repos",
                get(|| async { Json(json!({"message": "an object, not a list"})) }),
            );
        let base_url = spawn_upstream(router).await;
        let client = client_for(&base_url);

        let err = client.fetch_repositories("text").await.unwrap_err();
        assert!(matches!(err, UpstreamError::MalformedResponse(_)));

        let err = client.fetch_repositories("object").await.unwrap_err();
        assert!(matches!(err, UpstreamError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_unreachable() {
        let router = Router::new().route(
            "/orgs/{org}/repos",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!([]))
            }),
        );
        let base_url = spawn_upstream(router).await;

        let client = GitHubClient::new(base_url, Duration::from_millis(200)).unwrap();
        let err = client.fetch_repositories("slow").await.unwrap_err();
        assert!(err.is_unreachable());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{}", addr))
            .fetch_repositories("acme")
            .await
            .unwrap_err();
        assert!(err.is_unreachable());
    }
}
