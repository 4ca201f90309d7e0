//! Domain models for the Crop Advisor backend
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
