//! Service Module
//!
//! Business logic layer for the server.
//! Services orchestrate between the upstream client and the domain filters.

pub mod repo_list;

// Re-export for convenience
pub use repo_list as repo_list_service;
