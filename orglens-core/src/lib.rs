//! Orglens Core
//!
//! Core types shared by the Orglens services.
//!
//! This crate contains:
//! - Domain types: repository records as decoded from the upstream API, and
//!   the name filter applied to them
//! - DTOs: JSON payloads returned by the HTTP API

pub mod domain;
pub mod dto;
