//! Plan generation service
//!
//! Validates requests, runs the shared calculator against the loaded
//! reference tables and records usage counters.

use crate::error::ApiError;
use crate::state::AppState;
use fitness_planner_shared::types::{
    MetricsRequest, MetricsResponse, PlanRequest, PlanResponse, WorkoutPlanResponse,
};
use fitness_planner_shared::{generate_plan, DietRecord, Goal, HealthMetrics};
use tracing::debug;
use validator::Validate;

/// Plan generation service
pub struct PlanService;

impl PlanService {
    /// Build a full plan: metrics, diet recommendation and weekly workouts
    pub fn generate(state: &AppState, req: PlanRequest) -> Result<PlanResponse, ApiError> {
        req.validate()?;
        let profile = req.into_profile()?;

        let plan = generate_plan(&profile, state.diets(), state.workouts());

        debug!(
            goal = %profile.goal(),
            diet = %profile.diet_preference(),
            budget = %profile.budget(),
            diet_matched = !plan.diet.is_fallback(),
            "Generated fitness plan"
        );
        metrics::counter!("fitness_plans_generated_total", "goal" => profile.goal().as_str())
            .increment(1);
        if plan.diet.is_fallback() {
            metrics::counter!("fitness_plan_diet_fallbacks_total").increment(1);
        }

        Ok(PlanResponse::new(plan, profile.available_time()))
    }

    /// Calculate health metrics only
    pub fn metrics(req: MetricsRequest) -> Result<MetricsResponse, ApiError> {
        req.validate()?;
        let goal = req.parsed_goal()?;
        let metrics = HealthMetrics::calculate(req.age, req.weight_kg, req.height_cm, goal);
        Ok(MetricsResponse::from(metrics))
    }

    /// Weekly workout plan for a goal given by its display name
    pub fn workout_plan(state: &AppState, goal: &str) -> Result<WorkoutPlanResponse, ApiError> {
        let goal: Goal = goal.parse()?;
        let plan = state.workouts().weekly_workout_plan(goal);
        Ok(WorkoutPlanResponse {
            goal: plan.goal,
            days: plan.days,
        })
    }

    /// Every loaded diet record
    pub fn diets(state: &AppState) -> Vec<DietRecord> {
        state.diets().records().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use fitness_planner_shared::{AvailableTime, DietTable};
    use rstest::rstest;

    fn state() -> AppState {
        let diets = DietTable::from_csv_str(
            "goal,diet_type,budget,meal_plan,protein,carbs,fats\n\
             Weight Loss,Veg,Low,Oats and dal,60g,150g,35g\n",
        )
        .unwrap();
        AppState::new(AppConfig::default(), diets)
    }

    fn request(age: u32) -> PlanRequest {
        PlanRequest {
            age,
            weight_kg: 70,
            height_cm: 175,
            goal: "Weight Loss".to_string(),
            diet_preference: "Veg".to_string(),
            budget: "Low".to_string(),
            available_time: "15 min".to_string(),
        }
    }

    #[test]
    fn test_generate_plan() {
        let response = PlanService::generate(&state(), request(25)).unwrap();
        assert_eq!(response.daily_calories_kcal, 1374);
        assert_eq!(response.available_time, AvailableTime::Minutes15);
        assert_eq!(response.plan.diet.record().unwrap().meal_plan, "Oats and dal");
        assert_eq!(response.plan.workout.days[0].activity, "30 min Cardio");
    }

    #[test]
    fn test_generate_rejects_out_of_range_age() {
        let err = PlanService::generate(&state(), request(8)).unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[rstest]
    #[case("goal", "Bulking")]
    #[case("diet_preference", "Vegan")]
    #[case("budget", "High")]
    #[case("available_time", "5 min")]
    fn test_generate_unknown_key_is_validation_error(#[case] key: &str, #[case] value: &str) {
        let mut req = request(25);
        match key {
            "goal" => req.goal = value.to_string(),
            "diet_preference" => req.diet_preference = value.to_string(),
            "budget" => req.budget = value.to_string(),
            _ => req.available_time = value.to_string(),
        }

        match PlanService::generate(&state(), req).unwrap_err() {
            ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some(key)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_metrics_unknown_goal_is_validation_error() {
        let err = PlanService::metrics(MetricsRequest {
            age: 25,
            weight_kg: 70,
            height_cm: 175,
            goal: "Bulking".to_string(),
        })
        .unwrap_err();
        match err {
            ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("goal")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_metrics_only() {
        let response = PlanService::metrics(MetricsRequest {
            age: 25,
            weight_kg: 100,
            height_cm: 175,
            goal: "General Fitness".to_string(),
        })
        .unwrap();
        assert_eq!(response.metrics.bmi, 32.65);
        assert_eq!(response.metrics.daily_water_liters, 3.3);
        assert_eq!(response.metrics.daily_step_target, 10_000);
    }

    #[rstest]
    #[case("Weight Loss", Goal::WeightLoss, "30 min Cardio")]
    #[case("Muscle Gain", Goal::MuscleGain, "Chest and Triceps")]
    #[case("General Fitness", Goal::GeneralFitness, "Jogging")]
    fn test_workout_plan_by_name(#[case] name: &str, #[case] goal: Goal, #[case] monday: &str) {
        let plan = PlanService::workout_plan(&state(), name).unwrap();
        assert_eq!(plan.goal, goal);
        assert_eq!(plan.days[0].activity, monday);
        assert_eq!(plan.days[6].day, "Sunday");
        assert_eq!(plan.days[6].activity, "Rest");
    }

    #[rstest]
    #[case("Cutting")]
    #[case("muscle gain")]
    fn test_workout_plan_unknown_goal(#[case] name: &str) {
        let err = PlanService::workout_plan(&state(), name).unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[test]
    fn test_diets_lists_loaded_records() {
        let diets = PlanService::diets(&state());
        assert_eq!(diets.len(), 1);
        assert_eq!(diets[0].diet_type, "Veg");
    }
}
