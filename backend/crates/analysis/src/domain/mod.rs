//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (UploadArtifact, CipherTexts)
//! - Domain value objects (WavFileName, MIME allow-list)
//! - Domain services (the canned analysis fixtures)

pub mod entities;
pub mod services;
pub mod value_objects;
