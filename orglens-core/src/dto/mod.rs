//! Data Transfer Objects
//!
//! JSON bodies produced by the Orglens HTTP API.

pub mod message;
pub mod repository;

pub use message::{ErrorResponse, MessageResponse};
pub use repository::RepoListResponse;
