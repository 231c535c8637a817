//! Fitness plan assembly
//!
//! Combines the calculator, the diet table and the workout table into the
//! plain-data plan handed to a presentation layer.

use crate::diet::{DietRecommendation, DietTable, MacroBreakdown};
use crate::health_metrics::HealthMetrics;
use crate::models::UserProfile;
use crate::workout::{WeeklyWorkoutPlan, WorkoutPlanTable};
use serde::{Deserialize, Serialize};

/// Everything generated for one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessPlan {
    pub metrics: HealthMetrics,
    pub diet: DietRecommendation,
    pub workout: WeeklyWorkoutPlan,
    /// Macro grams of the matched meal plan, absent on fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<MacroBreakdown>,
}

/// Build a plan for a profile from the loaded reference tables
pub fn generate_plan(
    profile: &UserProfile,
    diets: &DietTable,
    workouts: &WorkoutPlanTable,
) -> FitnessPlan {
    let diet = diets.recommend(profile.goal(), profile.diet_preference(), profile.budget());
    let nutrition = diet.record().map(|record| record.macros);

    FitnessPlan {
        metrics: HealthMetrics::for_profile(profile),
        diet,
        workout: workouts.weekly_workout_plan(profile.goal()),
        nutrition,
    }
}
