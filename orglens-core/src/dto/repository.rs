//! Repository listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::repository::RepositoryRecord;

/// Body of a successful `GET /repo-list/{org_name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoListResponse {
    pub organization: String,
    pub count: usize,
    pub repositories: Vec<RepositoryRecord>,
}

impl RepoListResponse {
    /// Build a response whose `count` always matches `repositories`
    pub fn new(organization: impl Into<String>, repositories: Vec<RepositoryRecord>) -> Self {
        Self {
            organization: organization.into(),
            count: repositories.len(),
            repositories,
        }
    }
}
