//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitness_planner_shared::types::{ErrorDetail, ErrorResponse};
use fitness_planner_shared::PlanError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        details: Option<serde_json::Value>,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            details: None,
        }
    }
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        if err.is_client_error() {
            ApiError::validation(err.to_string(), err.field())
        } else {
            ApiError::Internal(err.into())
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        // HashMap order is unspecified; report fields alphabetically
        fields.sort();

        let (field, message) = fields
            .first()
            .map(|(field, messages)| {
                (
                    Some(field.clone()),
                    messages.first().cloned().unwrap_or_default(),
                )
            })
            .unwrap_or((None, "Invalid input".to_string()));

        let details = serde_json::Value::Object(
            fields
                .into_iter()
                .map(|(field, messages)| (field, serde_json::json!(messages)))
                .collect(),
        );

        ApiError::Validation {
            message,
            field,
            details: Some(details),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, field, details) = match self {
            ApiError::Validation {
                message,
                field,
                details,
            } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field, details),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None, None),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
                details,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_planner_shared::types::PlanRequest;
    use validator::Validate;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::validation("Invalid input", Some("age"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("Workout plan not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unknown_goal_maps_to_validation() {
        let error = ApiError::from(PlanError::UnknownGoal("Bulk".to_string()));
        match &error {
            ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("goal")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_data_maps_to_internal() {
        let error = ApiError::from(PlanError::MalformedGrams {
            field: "fats",
            row: 1,
            value: "x".to_string(),
        });
        assert!(matches!(error, ApiError::Internal(_)));
        assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validator_errors_pick_first_field() {
        let req = PlanRequest {
            age: 5,
            weight_kg: 500,
            height_cm: 175,
            goal: "Weight Loss".to_string(),
            diet_preference: "Veg".to_string(),
            budget: "Low".to_string(),
            available_time: "30 min".to_string(),
        };
        let error = ApiError::from(req.validate().unwrap_err());
        match error {
            ApiError::Validation {
                message,
                field,
                details,
            } => {
                assert_eq!(field.as_deref(), Some("age"));
                assert_eq!(message, "Age must be at least 10");
                let details = details.unwrap();
                assert!(details.get("weight_kg").is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
