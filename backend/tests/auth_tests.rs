//! Authentication flow integration tests
//!
//! End-to-end register/login/token flows against the in-memory store.

use uuid::Uuid;

use crop_advisor_backend::config::{
    Config, DatasetConfig, JwtConfig, ServerConfig, WeatherConfig,
};
use crop_advisor_backend::error::AppError;
use crop_advisor_backend::services::auth::{AuthService, RegisterInput};
use crop_advisor_backend::store::Store;

fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        dataset: DatasetConfig {
            path: "data/crop_recommendation.csv".to_string(),
        },
        jwt: JwtConfig {
            secret: "test-secret-key".to_string(),
            access_token_expiry: 3600,
        },
        weather: WeatherConfig {
            api_endpoint: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key: String::new(),
        },
    }
}

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        name: "Ramesh Patel".to_string(),
        email: email.to_string(),
        password: "growmorecrops".to_string(),
        state: "Gujarat".to_string(),
        city: "Vadodara".to_string(),
        land_area_sqft: 87120.0,
    }
}

#[test]
fn test_register_then_login() {
    let service = AuthService::new(Store::new(), &test_config());

    let registered = service.register(register_input("farmer@example.com")).unwrap();
    assert_eq!(registered.token_type, "Bearer");
    assert_eq!(registered.expires_in, 3600);
    assert!(!registered.access_token.is_empty());

    let tokens = service.login("farmer@example.com", "growmorecrops").unwrap();
    let claims = service.validate_token(&tokens.access_token).unwrap();
    assert_eq!(claims.sub, registered.user_id.to_string());
    assert_eq!(claims.city, "Vadodara");
}

#[test]
fn test_login_is_case_insensitive_on_email() {
    let service = AuthService::new(Store::new(), &test_config());
    service.register(register_input("Farmer@Example.com")).unwrap();
    assert!(service.login("farmer@example.com", "growmorecrops").is_ok());
}

#[test]
fn test_duplicate_registration_rejected() {
    let service = AuthService::new(Store::new(), &test_config());
    service.register(register_input("dup@example.com")).unwrap();
    let err = service.register(register_input("dup@example.com")).unwrap_err();
    assert!(matches!(err, AppError::DuplicateEntry(_)));
}

#[test]
fn test_wrong_password_and_unknown_email_look_identical() {
    let service = AuthService::new(Store::new(), &test_config());
    service.register(register_input("farmer@example.com")).unwrap();

    let wrong_password = service
        .login("farmer@example.com", "not-the-password")
        .unwrap_err();
    let unknown_email = service
        .login("stranger@example.com", "growmorecrops")
        .unwrap_err();

    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(unknown_email, AppError::InvalidCredentials));
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let store = Store::new();
    let service = AuthService::new(store.clone(), &test_config());
    service.register(register_input("farmer@example.com")).unwrap();
    let tokens = service.login("farmer@example.com", "growmorecrops").unwrap();

    let mut other_config = test_config();
    other_config.jwt.secret = "a-different-secret".to_string();
    let other_service = AuthService::new(store, &other_config);

    let err = other_service.validate_token(&tokens.access_token).unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[test]
fn test_garbage_token_rejected() {
    let service = AuthService::new(Store::new(), &test_config());
    let err = service.validate_token("not.a.jwt").unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[test]
fn test_registration_validation_surfaces_field() {
    let service = AuthService::new(Store::new(), &test_config());

    let mut input = register_input("bad@example.com");
    input.state = "Atlantis".to_string();
    let err = service.register(input).unwrap_err();
    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "state"));

    let mut input = register_input("bad@example.com");
    input.land_area_sqft = 0.0;
    let err = service.register(input).unwrap_err();
    assert!(matches!(err, AppError::Validation { ref field, .. } if field == "land_area_sqft"));
}

#[test]
fn test_claims_sub_parses_back_to_user_id() {
    let service = AuthService::new(Store::new(), &test_config());
    let registered = service.register(register_input("farmer@example.com")).unwrap();
    let claims = service.validate_token(&registered.access_token).unwrap();
    let parsed: Uuid = claims.sub.parse().unwrap();
    assert_eq!(parsed, registered.user_id);
}
