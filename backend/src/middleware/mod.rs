//! Middleware for the Crop Advisor platform

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
