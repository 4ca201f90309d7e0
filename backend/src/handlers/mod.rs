//! HTTP handlers for the Crop Advisor platform

pub mod auth;
pub mod crops;
pub mod health;
pub mod land;

pub use auth::*;
pub use crops::*;
pub use health::*;
pub use land::*;
