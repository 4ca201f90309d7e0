//! Shared types and models for the Crop Advisor platform
//!
//! This crate contains types shared between the backend and any future
//! frontend components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
