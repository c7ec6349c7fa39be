//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic behind the HTTP boundary.
//! Contains use case implementations.

pub mod analyze_upload;
pub mod config;
