//! Input validation functions
//!
//! This module provides validation utilities for planner input.
//! The ranges below are the only source of the accepted bounds: the
//! request types implement `validator::Validate` on top of
//! [`validate_body_measurements`], and `UserProfile::new` calls the
//! per-field checks directly.

use validator::{ValidationError, ValidationErrors};

/// Accepted age range in years
pub const AGE_RANGE: (u32, u32) = (10, 60);

/// Accepted weight range in kilograms
pub const WEIGHT_KG_RANGE: (u32, u32) = (20, 120);

/// Accepted height range in centimeters
pub const HEIGHT_CM_RANGE: (u32, u32) = (100, 200);

/// Validate age (in years)
pub fn validate_age(age: u32) -> Result<(), String> {
    if age < AGE_RANGE.0 {
        return Err(format!("Age must be at least {}", AGE_RANGE.0));
    }
    if age > AGE_RANGE.1 {
        return Err(format!("Age must be at most {}", AGE_RANGE.1));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: u32) -> Result<(), String> {
    if weight_kg < WEIGHT_KG_RANGE.0 {
        return Err(format!("Weight must be at least {} kg", WEIGHT_KG_RANGE.0));
    }
    if weight_kg > WEIGHT_KG_RANGE.1 {
        return Err(format!("Weight must be at most {} kg", WEIGHT_KG_RANGE.1));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: u32) -> Result<(), String> {
    if height_cm < HEIGHT_CM_RANGE.0 {
        return Err(format!("Height must be at least {} cm", HEIGHT_CM_RANGE.0));
    }
    if height_cm > HEIGHT_CM_RANGE.1 {
        return Err(format!("Height must be at most {} cm", HEIGHT_CM_RANGE.1));
    }
    Ok(())
}

/// Check age, weight and height together, collecting every failure
///
/// Each failing field is reported under its request field name with the
/// same message the single-field validators produce.
pub fn validate_body_measurements(
    age: u32,
    weight_kg: u32,
    height_cm: u32,
) -> Result<(), ValidationErrors> {
    let checks = [
        ("age", validate_age(age)),
        ("weight_kg", validate_weight_kg(weight_kg)),
        ("height_cm", validate_height_cm(height_cm)),
    ];

    let mut errors = ValidationErrors::new();
    for (field, result) in checks {
        if let Err(message) = result {
            let mut error = ValidationError::new("range");
            error.message = Some(message.into());
            errors.add(field, error);
        }
    }

    if errors.field_errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
