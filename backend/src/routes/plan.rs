//! Fitness plan API routes

use crate::error::ApiError;
use crate::services::PlanService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use fitness_planner_shared::types::{
    MetricsRequest, MetricsResponse, PlanRequest, PlanResponse, WorkoutPlanResponse,
};
use fitness_planner_shared::DietRecord;

/// Create plan routes
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/plan", post(create_plan))
        .route("/metrics", post(calculate_metrics))
        .route("/workouts/:goal", get(get_workout_plan))
        .route("/diets", get(list_diets))
}

/// POST /api/v1/plan - Generate a full fitness plan
async fn create_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(PlanService::generate(&state, req)?))
}

/// POST /api/v1/metrics - Calculate health metrics only
async fn calculate_metrics(
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(PlanService::metrics(req)?))
}

/// GET /api/v1/workouts/:goal - Weekly workout plan for a goal
async fn get_workout_plan(
    State(state): State<AppState>,
    Path(goal): Path<String>,
) -> Result<Json<WorkoutPlanResponse>, ApiError> {
    Ok(Json(PlanService::workout_plan(&state, &goal)?))
}

/// GET /api/v1/diets - All loaded diet records
async fn list_diets(State(state): State<AppState>) -> Json<Vec<DietRecord>> {
    Json(PlanService::diets(&state))
}
