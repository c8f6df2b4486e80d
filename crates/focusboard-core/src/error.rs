//! Error types for the focusboard library.
//!
//! Store and session operations never fail: unknown ids degrade to no-ops.
//! Errors only surface at the boundaries, when validating caller input,
//! loading a seed file, or when a front end explicitly asks for a lookup
//! that must succeed.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all focusboard operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Task not found for the given ID
    #[error("Task with ID '{id}' not found")]
    TaskNotFound { id: String },
    /// Step not found for the given ID
    #[error("Step with ID '{id}' not found")]
    StepNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BoardError {
        BoardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BoardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a task-not-found error for the given id.
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::TaskNotFound { id: id.into() }
    }

    /// Creates a step-not-found error for the given id.
    pub fn step_not_found(id: impl Into<String>) -> Self {
        Self::StepNotFound { id: id.into() }
    }
}

/// Result type alias for focusboard operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = BoardError::invalid_input("impact_stars").with_reason("must be 1, 2 or 3");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'impact_stars': must be 1, 2 or 3"
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            BoardError::task_not_found("task-9").to_string(),
            "Task with ID 'task-9' not found"
        );
        assert_eq!(
            BoardError::step_not_found("step-1z").to_string(),
            "Step with ID 'step-1z' not found"
        );
    }
}
