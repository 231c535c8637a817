//! API request and response types

use crate::errors::PlanResult;
use crate::health_metrics::HealthMetrics;
use crate::models::{AvailableTime, Budget, DietType, Goal, UserProfile};
use crate::planner::FitnessPlan;
use crate::validation::validate_body_measurements;
use crate::workout::WorkoutDay;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Full plan request
///
/// The selection keys arrive as their display spellings and are parsed in
/// [`PlanRequest::into_profile`], so an unknown value surfaces as a
/// field-level [`crate::PlanError`] rather than a body decoding failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub age: u32,
    pub weight_kg: u32,
    pub height_cm: u32,
    pub goal: String,
    pub diet_preference: String,
    pub budget: String,
    #[serde(default = "default_available_time")]
    pub available_time: String,
}

fn default_available_time() -> String {
    AvailableTime::default().as_str().to_string()
}

impl Validate for PlanRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_body_measurements(self.age, self.weight_kg, self.height_cm)
    }
}

impl PlanRequest {
    /// Convert into a validated profile
    pub fn into_profile(self) -> PlanResult<UserProfile> {
        UserProfile::new(
            self.age,
            self.weight_kg,
            self.height_cm,
            self.goal.parse::<Goal>()?,
            self.diet_preference.parse::<DietType>()?,
            self.budget.parse::<Budget>()?,
            self.available_time.parse::<AvailableTime>()?,
        )
    }
}

/// Full plan response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: FitnessPlan,
    /// Calorie target rounded for display
    pub daily_calories_kcal: i64,
    pub available_time: AvailableTime,
}

impl PlanResponse {
    pub fn new(plan: FitnessPlan, available_time: AvailableTime) -> Self {
        Self {
            daily_calories_kcal: plan.metrics.rounded_calories(),
            plan,
            available_time,
        }
    }
}

/// Metrics-only request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRequest {
    pub age: u32,
    pub weight_kg: u32,
    pub height_cm: u32,
    pub goal: String,
}

impl Validate for MetricsRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_body_measurements(self.age, self.weight_kg, self.height_cm)
    }
}

impl MetricsRequest {
    /// Parse the goal from its display name
    pub fn parsed_goal(&self) -> PlanResult<Goal> {
        self.goal.parse()
    }
}

/// Metrics-only response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub metrics: HealthMetrics,
    pub daily_calories_kcal: i64,
}

impl From<HealthMetrics> for MetricsResponse {
    fn from(metrics: HealthMetrics) -> Self {
        Self {
            daily_calories_kcal: metrics.rounded_calories(),
            metrics,
        }
    }
}

/// Weekly workout response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanResponse {
    pub goal: Goal,
    pub days: [WorkoutDay; 7],
}
