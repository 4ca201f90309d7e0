//! Business logic services for the Crop Advisor platform

pub mod auth;
pub mod crop_facts;
pub mod crop_log;
pub mod dataset;
pub mod projection;
pub mod recommendation;
pub mod soil;

pub use auth::AuthService;
pub use crop_facts::CropFactsTable;
pub use crop_log::CropLogService;
pub use projection::EconomicsProjector;
pub use recommendation::RecommendationEngine;
pub use soil::SoilTable;
