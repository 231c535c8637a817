//! Fitness Planner WASM Module
//!
//! This crate provides WebAssembly bindings so the planner can run in the
//! browser without a round trip to the backend.

use fitness_planner_shared::types::{PlanRequest, PlanResponse};
use fitness_planner_shared::{self as planner, DietTable, Goal, PlanError, WorkoutPlanTable};
use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

/// Workout schedules, built on first use and shared by every call
static WORKOUTS: Lazy<WorkoutPlanTable> = Lazy::new(WorkoutPlanTable::default);

fn parse_goal(goal: &str) -> Result<Goal, JsError> {
    goal.parse().map_err(|e: PlanError| JsError::new(&e.to_string()))
}

/// Calculate BMI from weight (kg) and height (cm), rounded to 2 decimals
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    planner::calculate_bmi(weight_kg, height_cm)
}

/// BMI category label, e.g. "Normal Weight"
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    planner::bmi_category(bmi).description().to_string()
}

/// Daily calorie target for a goal given by its display name
#[wasm_bindgen]
pub fn calorie_requirement(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    goal: &str,
) -> Result<f64, JsError> {
    let goal = parse_goal(goal)?;
    Ok(planner::calorie_requirement(weight_kg, height_cm, age_years, goal))
}

/// Daily water intake in liters
#[wasm_bindgen]
pub fn water_intake(weight_kg: f64) -> f64 {
    planner::water_intake(weight_kg)
}

/// Canonical daily step target for a goal
#[wasm_bindgen]
pub fn step_target(goal: &str) -> Result<u32, JsError> {
    Ok(planner::step_target(parse_goal(goal)?))
}

/// Step range label for a goal, e.g. "7,000 - 9,000 steps per day"
#[wasm_bindgen]
pub fn step_range_label(goal: &str) -> Result<String, JsError> {
    Ok(planner::step_suggestion(parse_goal(goal)?).range_label())
}

/// Weekly workout plan for a goal, as JSON
#[wasm_bindgen]
pub fn weekly_workout_plan(goal: &str) -> Result<String, JsError> {
    let plan = WORKOUTS.weekly_workout_plan(parse_goal(goal)?);
    serde_json::to_string(&plan).map_err(|e| JsError::new(&e.to_string()))
}

/// Generate a full plan
///
/// `diet_csv` is the diet table CSV text and `request_json` a serialized
/// `PlanRequest`. Returns the serialized `PlanResponse`.
#[wasm_bindgen]
pub fn generate_plan(diet_csv: &str, request_json: &str) -> Result<String, JsError> {
    generate_plan_json(diet_csv, request_json).map_err(|e| JsError::new(&e))
}

fn generate_plan_json(diet_csv: &str, request_json: &str) -> Result<String, String> {
    let diets = DietTable::from_csv_str(diet_csv).map_err(|e| e.to_string())?;
    let request: PlanRequest = serde_json::from_str(request_json).map_err(|e| e.to_string())?;
    let profile = request.into_profile().map_err(|e| e.to_string())?;

    let plan = planner::generate_plan(&profile, &diets, &WORKOUTS);
    serde_json::to_string(&PlanResponse::new(plan, profile.available_time()))
        .map_err(|e| e.to_string())
}
