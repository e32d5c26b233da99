//! Core domain types
//!
//! These types are shared between the upstream client (which decodes them)
//! and the server (which filters and re-serializes them).

pub mod repository;
