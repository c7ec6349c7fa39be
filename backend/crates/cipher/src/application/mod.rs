//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic behind the HTTP boundary.
//! Contains use case implementations.

pub mod config;
pub mod decrypt_cipher;
