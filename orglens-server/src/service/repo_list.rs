//! Repository Listing Service
//!
//! Validates the request, fetches the organization's repositories from the
//! upstream source and applies the name filter.

use orglens_client::{RepositorySource, UpstreamError};
use orglens_core::domain::repository::filter_by_name;
use orglens_core::dto::RepoListResponse;

/// Service error type
#[derive(Debug)]
pub enum RepoListError {
    MissingOrganization,
    Upstream(UpstreamError),
}

impl From<UpstreamError> for RepoListError {
    fn from(err: UpstreamError) -> Self {
        RepoListError::Upstream(err)
    }
}

pub type Result<T> = std::result::Result<T, RepoListError>;

/// List the repositories of `organization` whose name contains `filter`
///
/// An empty `filter` keeps every repository. The organization is validated
/// before the upstream source is contacted.
pub async fn list_repositories(
    source: &dyn RepositorySource,
    organization: &str,
    filter: &str,
) -> Result<RepoListResponse> {
    validate_organization(organization)?;

    let repositories = source
        .fetch_repositories(organization)
        .await
        .inspect_err(|e| tracing::warn!("Upstream listing for {} failed: {}", organization, e))?;

    let fetched = repositories.len();
    let repositories = filter_by_name(repositories, filter);

    tracing::debug!(
        "Organization {}: {} repositories fetched, {} kept by filter '{}'",
        organization,
        fetched,
        repositories.len(),
        filter
    );

    Ok(RepoListResponse::new(organization, repositories))
}

// =============================================================================
// Validation
// =============================================================================

fn validate_organization(organization: &str) -> Result<()> {
    if organization.is_empty() {
        return Err(RepoListError::MissingOrganization);
    }

    Ok(())
}
