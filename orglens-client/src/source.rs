//! Repository source abstraction

use async_trait::async_trait;
use orglens_core::domain::repository::RepositoryRecord;

use crate::error::Result;

/// Anything that can list the repositories of an organization
///
/// Implemented by [`crate::GitHubClient`]; trait-based so the server can be
/// exercised against stubs.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch the repositories of `organization`, in upstream order
    ///
    /// # Arguments
    /// * `organization` - Organization name, never empty
    async fn fetch_repositories(&self, organization: &str) -> Result<Vec<RepositoryRecord>>;
}
