//! # Agenda Core
//!
//! Shared domain types for the Agenda appointment service: the error
//! taxonomy used across crates and the request/response models for the
//! appointment resource.

/// Domain error types and result alias
pub mod errors;
/// Request and response models
pub mod models;
