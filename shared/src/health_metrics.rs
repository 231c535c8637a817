//! Health metrics calculations module
//!
//! Provides calculations for BMI, daily calorie targets, water intake and
//! step targets based on a [`UserProfile`].
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Display Rounding**: BMI and water intake are rounded to 2 decimals
//! 3. **Type Safety**: Goals are an enum, so every lookup is total

use crate::models::{Goal, UserProfile};
use serde::{Deserialize, Serialize};

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal Weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Calculate BMI from weight and height, rounded to 2 decimals
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Classify BMI into category
///
/// Boundaries are strict: 18.5, 24.9 and 29.9 belong to the next category up.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.9 {
        BmiCategory::NormalWeight
    } else if bmi < 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Calorie Calculations
// ============================================================================

/// Daily calorie adjustment applied on top of BMR for a goal
pub fn goal_calorie_offset(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => -300.0,
        Goal::MuscleGain => 300.0,
        Goal::GeneralFitness => 0.0,
    }
}

/// Calculate Basal Metabolic Rate
///
/// BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64 + 5.0
}

/// Calculate the daily calorie target for a goal
///
/// Not clamped. Inputs inside the profile ranges keep the result above 200 kcal.
pub fn calorie_requirement(weight_kg: f64, height_cm: f64, age_years: u32, goal: Goal) -> f64 {
    calculate_bmr(weight_kg, height_cm, age_years) + goal_calorie_offset(goal)
}

// ============================================================================
// Hydration Calculations
// ============================================================================

/// Liters of water per kilogram of body weight
pub const WATER_LITERS_PER_KG: f64 = 0.033;

/// Calculate recommended daily water intake in liters, rounded to 2 decimals
pub fn water_intake(weight_kg: f64) -> f64 {
    round2(weight_kg * WATER_LITERS_PER_KG)
}

// ============================================================================
// Step Targets
// ============================================================================

/// Daily step recommendation for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSuggestion {
    /// Canonical single target
    pub target: u32,
    /// Lower end of the recommended range
    pub range_min: u32,
    /// Upper end of the recommended range
    pub range_max: u32,
}

impl StepSuggestion {
    /// Render the range, e.g. `"10,000 - 12,000 steps per day"`
    pub fn range_label(&self) -> String {
        format!(
            "{} - {} steps per day",
            format_thousands(self.range_min),
            format_thousands(self.range_max)
        )
    }

    /// Render the single target, e.g. `"12,000 steps per day"`
    pub fn target_label(&self) -> String {
        format!("{} steps per day", format_thousands(self.target))
    }
}

/// Look up the step recommendation for a goal
pub fn step_suggestion(goal: Goal) -> StepSuggestion {
    let (target, range_min, range_max) = match goal {
        Goal::WeightLoss => (12_000, 10_000, 12_000),
        Goal::MuscleGain => (9_000, 7_000, 9_000),
        Goal::GeneralFitness => (10_000, 8_000, 10_000),
    };
    StepSuggestion {
        target,
        range_min,
        range_max,
    }
}

/// Canonical daily step target for a goal
pub fn step_target(goal: Goal) -> u32 {
    step_suggestion(goal).target
}

/// Format an integer with comma thousands separators
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// Combined Metrics
// ============================================================================

/// Metrics derived from a user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// BMI, 2 decimals
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Daily calorie target (unrounded)
    pub daily_calories: f64,
    /// Daily water intake in liters, 2 decimals
    pub daily_water_liters: f64,
    pub daily_step_target: u32,
    /// Step range rendered for display
    pub daily_step_range: String,
}

impl HealthMetrics {
    /// Calculate every metric from raw inputs
    ///
    /// Callers are expected to have range-checked the inputs.
    pub fn calculate(age_years: u32, weight_kg: u32, height_cm: u32, goal: Goal) -> Self {
        let weight = weight_kg as f64;
        let height = height_cm as f64;
        let bmi = calculate_bmi(weight, height);
        let steps = step_suggestion(goal);

        Self {
            bmi,
            bmi_category: bmi_category(bmi),
            daily_calories: calorie_requirement(weight, height, age_years, goal),
            daily_water_liters: water_intake(weight),
            daily_step_target: steps.target,
            daily_step_range: steps.range_label(),
        }
    }

    /// Calculate every metric for a profile
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self::calculate(
            profile.age(),
            profile.weight_kg(),
            profile.height_cm(),
            profile.goal(),
        )
    }

    /// Calorie target rounded to the nearest whole kcal
    pub fn rounded_calories(&self) -> i64 {
        self.daily_calories.round() as i64
    }
}
