//! Crop selection service
//!
//! Records which crop a user is growing and derives the harvest date from
//! the crop's duration. A user grows one crop at a time; selecting a new
//! one replaces the previous record.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use shared::models::UserCrop;

use crate::error::{AppError, AppResult};
use crate::services::crop_facts::CropFactsTable;
use crate::store::Store;

/// Manages users' crop selections
#[derive(Clone)]
pub struct CropLogService {
    store: Store,
    facts: Arc<CropFactsTable>,
}

impl CropLogService {
    pub fn new(store: Store, facts: Arc<CropFactsTable>) -> Self {
        Self { store, facts }
    }

    /// Select a crop for the user, replacing any previous selection.
    /// The harvest date is sowing date plus the crop's duration.
    pub fn select_crop(&self, user_id: Uuid, crop_name: &str) -> AppResult<UserCrop> {
        let crop_name = crop_name.trim();
        if crop_name.is_empty() {
            return Err(AppError::ValidationError(
                "crop name cannot be empty".to_string(),
            ));
        }

        let duration = self.facts.duration_of(crop_name);
        let sowing_date = Utc::now();
        let crop = UserCrop {
            user_id,
            crop_name: crop_name.to_string(),
            sowing_date,
            harvest_date: sowing_date + Duration::days(i64::from(duration)),
        };

        self.store.replace_user_crop(crop.clone())?;
        Ok(crop)
    }

    /// The user's current crop selection, or `NotFound` if none exists
    pub fn current_crop(&self, user_id: Uuid) -> AppResult<UserCrop> {
        self.store
            .user_crop(user_id)?
            .ok_or_else(|| AppError::NotFound("Crop selection".to_string()))
    }

    /// Clear the user's crop selection
    pub fn clear_selection(&self, user_id: Uuid) -> AppResult<()> {
        self.store.delete_user_crop(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CropLogService {
        CropLogService::new(Store::new(), Arc::new(CropFactsTable::new()))
    }

    #[test]
    fn test_select_crop_sets_harvest_date_from_duration() {
        let service = service();
        let user_id = Uuid::new_v4();
        let crop = service.select_crop(user_id, "rice").unwrap();
        assert_eq!(crop.crop_name, "rice");
        assert_eq!(crop.harvest_date - crop.sowing_date, Duration::days(120));
    }

    #[test]
    fn test_reselecting_replaces_previous_crop() {
        let service = service();
        let user_id = Uuid::new_v4();
        service.select_crop(user_id, "rice").unwrap();
        service.select_crop(user_id, "maize").unwrap();
        assert_eq!(service.current_crop(user_id).unwrap().crop_name, "maize");
    }

    #[test]
    fn test_no_selection_is_not_found() {
        let service = service();
        let err = service.current_crop(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_empty_crop_name_rejected() {
        let service = service();
        let err = service.select_crop(Uuid::new_v4(), "  ").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_crop_uses_default_duration() {
        let service = service();
        let crop = service.select_crop(Uuid::new_v4(), "starfruit").unwrap();
        assert_eq!(crop.harvest_date - crop.sowing_date, Duration::days(100));
    }
}
