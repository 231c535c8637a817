//! Error types for the Fitness Planner

use thiserror::Error;

/// Errors raised while building a fitness plan or loading its reference data
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Unknown fitness goal: {0:?}")]
    UnknownGoal(String),

    #[error("Unknown diet type: {0:?}")]
    UnknownDietType(String),

    #[error("Unknown budget level: {0:?}")]
    UnknownBudget(String),

    #[error("Unknown available time: {0:?}")]
    UnknownAvailableTime(String),

    /// A macro field in the diet table is not of the form `<integer>g`
    #[error("Malformed {field} value {value:?} in diet table row {row}")]
    MalformedGrams {
        field: &'static str,
        row: u64,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Build a validation error for a named input field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        PlanError::Validation {
            field,
            message: message.into(),
        }
    }

    /// The offending input field, when the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PlanError::Validation { field, .. } => Some(*field),
            PlanError::UnknownGoal(_) => Some("goal"),
            PlanError::UnknownDietType(_) => Some("diet_preference"),
            PlanError::UnknownBudget(_) => Some("budget"),
            PlanError::UnknownAvailableTime(_) => Some("available_time"),
            PlanError::MalformedGrams { field, .. } => Some(*field),
            PlanError::Csv(_) | PlanError::Io(_) => None,
        }
    }

    /// Whether the error was caused by caller input rather than reference data
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PlanError::Validation { .. }
                | PlanError::UnknownGoal(_)
                | PlanError::UnknownDietType(_)
                | PlanError::UnknownBudget(_)
                | PlanError::UnknownAvailableTime(_)
        )
    }
}

/// Result alias for planner operations
pub type PlanResult<T> = Result<T, PlanError>;
