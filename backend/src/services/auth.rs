//! Authentication service for farmer registration, login, and tokens

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::models::User;
use shared::validation;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::store::{Store, UserRecord};

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    store: Store,
    jwt_secret: String,
    access_token_expiry: i64,
}

/// Input for registering a new farmer account
#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub state: String,
    pub city: String,
    pub land_area_sqft: f64,
}

/// Response after successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// City the account is registered in, used for soil/weather lookups
    pub city: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication tokens
#[derive(Debug, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(store: Store, config: &Config) -> Self {
        Self {
            store,
            jwt_secret: config.jwt.secret.clone(),
            access_token_expiry: config.jwt.access_token_expiry,
        }
    }

    /// Register a new farmer account
    pub fn register(&self, input: RegisterInput) -> AppResult<RegisterResponse> {
        Self::validate_registration(&input)?;

        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            state: input.state.trim().to_string(),
            city: input.city.trim().to_string(),
            land_area_sqft: input.land_area_sqft,
            created_at: Utc::now(),
        };

        let user_id = user.id;
        let city = user.city.clone();
        self.store.insert_user(UserRecord {
            user,
            password_hash,
        })?;

        let tokens = self.generate_tokens(user_id, &city)?;

        Ok(RegisterResponse {
            user_id,
            access_token: tokens.access_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
        })
    }

    /// Authenticate with email and password
    pub fn login(&self, email: &str, password: &str) -> AppResult<AuthTokens> {
        let record = self
            .store
            .user_by_email(email)?
            .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(password, &record.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        self.generate_tokens(record.user.id, &record.user.city)
    }

    /// Validate access token and return claims
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    fn validate_registration(input: &RegisterInput) -> AppResult<()> {
        let checks = [
            ("name", validation::validate_name(&input.name)),
            ("email", validation::validate_email(&input.email)),
            ("password", validation::validate_password(&input.password)),
            ("state", validation::validate_state(&input.state)),
            ("city", validation::validate_city(&input.city)),
            (
                "land_area_sqft",
                validation::validate_land_area(input.land_area_sqft),
            ),
        ];

        for (field, result) in checks {
            if let Err(message) = result {
                return Err(AppError::Validation {
                    field: field.to_string(),
                    message: message.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Generate an access token for a user
    fn generate_tokens(&self, user_id: Uuid, city: &str) -> AppResult<AuthTokens> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.access_token_expiry);

        let claims = Claims {
            sub: user_id.to_string(),
            city: city.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))?;

        Ok(AuthTokens {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_expiry,
        })
    }
}
