//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Reference tables are loaded once at startup and never mutated, so
//! handlers share them through `Arc` without locking.

use crate::config::AppConfig;
use fitness_planner_shared::{DietTable, WorkoutPlanTable};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// All fields are `Arc`s or handles, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Diet reference table
    pub diets: Arc<DietTable>,
    /// Weekly workout schedules
    pub workouts: Arc<WorkoutPlanTable>,
    /// Prometheus exporter handle, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state with the standard workout table
    pub fn new(config: AppConfig, diets: DietTable) -> Self {
        Self {
            config: Arc::new(config),
            diets: Arc::new(diets),
            workouts: Arc::new(WorkoutPlanTable::default()),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle used by the `/metrics` endpoint
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the diet table
    #[inline]
    pub fn diets(&self) -> &DietTable {
        &self.diets
    }

    /// Get a reference to the workout table
    #[inline]
    pub fn workouts(&self) -> &WorkoutPlanTable {
        &self.workouts
    }
}
