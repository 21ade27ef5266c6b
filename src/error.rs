//! Custom error types for the meal plan tracker
//!
//! A single error enum covers configuration, storage, validation and the
//! balance checks performed when meals and expenses are recorded.

use thiserror::Error;

/// The main error type for meal plan operations
#[derive(Error, Debug)]
pub enum MealPlanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models and inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// No semester has been set up yet
    #[error("No active semester. Run 'mealplan init' to set up your meal plan.")]
    NoActiveSemester,

    /// A meal or expense would overdraw a semester balance
    #[error("Insufficient {resource}: need {needed}, have {available}")]
    InsufficientBalance {
        resource: String,
        needed: String,
        available: String,
    },

    /// The setup wizard was abandoned before completion
    #[error("Setup cancelled")]
    SetupCancelled,

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MealPlanError {
    /// Create a "not found" error for semesters
    pub fn semester_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Semester",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for MealPlanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MealPlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for meal plan operations
pub type MealPlanResult<T> = Result<T, MealPlanError>;
