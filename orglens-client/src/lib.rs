//! Orglens Upstream Client
//!
//! A small, typed HTTP client for listing an organization's repositories on
//! the GitHub REST API.
//!
//! Every call is a single bounded-timeout `GET`; failures are classified into
//! [`UpstreamError`] so callers can map them to their own responses.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use orglens_client::{GitHubClient, RepositorySource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitHubClient::new("https://api.github.com", Duration::from_secs(10))?;
//! let repositories = client.fetch_repositories("golang").await?;
//! println!("golang has {} repositories on the first page", repositories.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
mod github;
mod source;

// Re-export commonly used types
pub use error::{Result, UpstreamError};
pub use github::{ACCEPT_GITHUB_JSON, DEFAULT_API_URL, DEFAULT_TIMEOUT, GitHubClient, USER_AGENT};
pub use orglens_core::domain::repository::RepositoryRecord;
pub use source::RepositorySource;
