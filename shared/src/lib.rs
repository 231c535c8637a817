//! Fitness Planner Shared Library
//!
//! This crate contains the health-plan calculator, its reference tables and
//! the request/response types used across the backend and WASM modules.

pub mod diet;
pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod planner;
pub mod types;
pub mod validation;
pub mod workout;

// Re-export commonly used items
pub use diet::{DietRecommendation, DietRecord, DietTable, Grams, MacroBreakdown, FALLBACK_DIET_MESSAGE};
pub use errors::*;
pub use health_metrics::*;
pub use models::{AvailableTime, Budget, DietType, Goal, UserProfile};
pub use planner::{generate_plan, FitnessPlan};
pub use workout::{WeeklyWorkoutPlan, WorkoutDay, WorkoutPlanTable};
