//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Decryption)
//! - Domain value objects (CipherKey, CaesarShift, Complexity)
//! - Domain services (decryption pipeline, scoring heuristic)

pub mod entities;
pub mod services;
pub mod value_objects;
