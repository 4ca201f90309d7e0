//! Domain models for the Crop Advisor platform

mod crop;
mod user;
mod weather;

pub use crop::*;
pub use user::*;
pub use weather::*;
