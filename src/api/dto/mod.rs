//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization; request DTOs use validator for
//! input validation.

pub mod health;
pub mod shorten;
