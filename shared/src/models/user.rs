//! User account and crop selection models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered farmer account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub state: String,
    pub city: String,
    /// Cultivable land area in square feet
    pub land_area_sqft: f64,
    pub created_at: DateTime<Utc>,
}

/// A user's currently selected crop with its sowing window.
///
/// Each user has at most one selection; choosing a new crop replaces the
/// previous record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCrop {
    pub user_id: Uuid,
    pub crop_name: String,
    pub sowing_date: DateTime<Utc>,
    pub harvest_date: DateTime<Utc>,
}
