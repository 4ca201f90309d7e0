//! Validation utilities for the Crop Advisor platform
//!
//! Registration-time checks for farmer accounts. The recommendation core
//! itself validates nothing beyond the land-area guard; these helpers back
//! the web layer's form handling.

// ============================================================================
// Account Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate a display name is non-empty after trimming
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    Ok(())
}

// ============================================================================
// Farm Validations
// ============================================================================

/// Validate land area is a positive, finite number of square feet
pub fn validate_land_area(land_area_sqft: f64) -> Result<(), &'static str> {
    if !land_area_sqft.is_finite() {
        return Err("Land area must be a number");
    }
    if land_area_sqft <= 0.0 {
        return Err("Land area must be greater than zero");
    }
    Ok(())
}

/// Indian states and union territories with significant agriculture,
/// accepted at registration
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// Validate state is a recognized Indian state (case-insensitive)
pub fn validate_state(state: &str) -> Result<(), &'static str> {
    let state_lower = state.to_lowercase();
    if INDIAN_STATES.iter().any(|s| s.to_lowercase() == state_lower) {
        return Ok(());
    }
    Err("State is not a recognized Indian state")
}

/// Validate city is non-empty; unknown cities are allowed and fall back to
/// the default soil baseline downstream
pub fn validate_city(city: &str) -> Result<(), &'static str> {
    if city.trim().is_empty() {
        return Err("City cannot be empty");
    }
    Ok(())
}
