//! Repository Listing API Handlers
//!
//! Proxies the upstream organization listing and maps every failure class to
//! a JSON error with a fixed status code.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use orglens_client::UpstreamError;
use orglens_core::dto::RepoListResponse;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::repo_list_service::{self, RepoListError};

/// Name of the optional filter query parameter
const REPO_FILTER_PARAM: &str = "repo_filter";

/// Query parameters as sent, in order; repeated keys are allowed
type QueryPairs = Vec<(String, String)>;

/// GET /repo-list/{org_name}?repo_filter=<optional>
pub async fn list_repositories(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<RepoListResponse>> {
    let Path(org_name) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let filter = repo_filter(&params);

    tracing::info!(
        "Listing repositories for organization: {} (filter: {:?})",
        org_name,
        filter
    );

    respond(&state, &org_name, filter).await
}

/// GET /repo-list/
/// No organization in the path
pub async fn list_repositories_without_org(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<RepoListResponse>> {
    let Query(params) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    respond(&state, "", repo_filter(&params)).await
}

/// First `repo_filter` value, empty when absent
fn repo_filter(params: &[(String, String)]) -> &str {
    params
        .iter()
        .find(|(key, _)| key == REPO_FILTER_PARAM)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

async fn respond(
    state: &AppState,
    org_name: &str,
    filter: &str,
) -> ApiResult<Json<RepoListResponse>> {
    let response =
        repo_list_service::list_repositories(state.repositories.as_ref(), org_name, filter)
            .await?;

    Ok(Json(response))
}

impl From<RepoListError> for ApiError {
    fn from(err: RepoListError) -> Self {
        match err {
            RepoListError::MissingOrganization => {
                ApiError::BadRequest("Organization name is required".to_string())
            }
            RepoListError::Upstream(UpstreamError::Unreachable(_)) => {
                ApiError::ServiceUnavailable("Failed to connect to GitHub API".to_string())
            }
            RepoListError::Upstream(UpstreamError::NotFound(name)) => {
                ApiError::NotFound(format!("Organization '{}' not found", name))
            }
            RepoListError::Upstream(UpstreamError::BadStatus(code)) => {
                ApiError::BadGateway(format!("GitHub API returned status: {}", code))
            }
            RepoListError::Upstream(UpstreamError::MalformedResponse(_)) => {
                ApiError::InternalError("Failed to parse GitHub response".to_string())
            }
            RepoListError::Upstream(UpstreamError::InvalidRequest(_)) => {
                ApiError::InternalError("Failed to create request".to_string())
            }
        }
    }
}
