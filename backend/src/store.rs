//! In-memory key-value store for user and crop records
//!
//! The platform treats persistence as a simple insert/query/delete store.
//! This implementation keeps everything behind one `RwLock`; reads take a
//! shared lock and all operations are short and non-blocking. Swappable
//! for a database-backed store without touching the services above it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use shared::models::{User, UserCrop};

use crate::error::{AppError, AppResult};

/// A user record together with its credential hash. The hash never leaves
/// the store module boundary except for verification in the auth service.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

#[derive(Default)]
struct StoreInner {
    users: HashMap<Uuid, UserRecord>,
    email_index: HashMap<String, Uuid>,
    user_crops: HashMap<Uuid, UserCrop>,
}

/// Shared in-memory store
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user. Fails with `DuplicateEntry` if the email is
    /// already registered (emails are matched case-insensitively).
    pub fn insert_user(&self, record: UserRecord) -> AppResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;

        let email_key = record.user.email.to_lowercase();
        if inner.email_index.contains_key(&email_key) {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        inner.email_index.insert(email_key, record.user.id);
        inner.users.insert(record.user.id, record);
        Ok(())
    }

    /// Look up a user by email, case-insensitively
    pub fn user_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;

        let record = inner
            .email_index
            .get(&email.to_lowercase())
            .and_then(|id| inner.users.get(id))
            .cloned();
        Ok(record)
    }

    /// Look up a user by id
    pub fn user_by_id(&self, user_id: Uuid) -> AppResult<Option<UserRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        Ok(inner.users.get(&user_id).cloned())
    }

    /// Replace the user's crop selection. A user has at most one selected
    /// crop; this mirrors the delete-then-insert the original flow used.
    pub fn replace_user_crop(&self, crop: UserCrop) -> AppResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        inner.user_crops.insert(crop.user_id, crop);
        Ok(())
    }

    /// The user's current crop selection, if any
    pub fn user_crop(&self, user_id: Uuid) -> AppResult<Option<UserCrop>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        Ok(inner.user_crops.get(&user_id).cloned())
    }

    /// Remove the user's crop selection
    pub fn delete_user_crop(&self, user_id: Uuid) -> AppResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))?;
        inner.user_crops.remove(&user_id);
        Ok(())
    }

    /// Number of registered users (health reporting)
    pub fn user_count(&self) -> usize {
        self.inner.read().map(|i| i.users.len()).unwrap_or(0)
    }
}
