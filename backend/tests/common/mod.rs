//! Common test utilities for integration tests
//!
//! This module provides a router wired to the diet table shipped in `data/`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitness_planner_backend::{config::AppConfig, routes, state::AppState};
use fitness_planner_shared::DietTable;
use tower::ServiceExt;

/// Path of the diet table shipped with the repository
pub const DIET_TABLE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/diet_data.csv");

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application backed by the shipped diet table
    pub fn new() -> Self {
        let diets = DietTable::from_path(DIET_TABLE_PATH).expect("Failed to load diet table");
        Self::with_diets(diets)
    }

    /// Create a test application backed by the given diet table
    pub fn with_diets(diets: DietTable) -> Self {
        let state = AppState::new(AppConfig::default(), diets);
        let app = routes::create_router(state);
        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}
