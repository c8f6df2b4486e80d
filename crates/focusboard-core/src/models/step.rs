//! Step model definition.

use serde::{Deserialize, Serialize};

use super::StepId;

/// An atomic sub-item of a task, either pending or completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Identifier, unique within the owning task
    pub id: StepId,

    /// User supplied text, never empty
    pub text: String,

    /// Whether the step has been checked off
    #[serde(default)]
    pub completed: bool,
}

impl Step {
    /// Creates a pending step.
    pub fn pending(id: impl Into<StepId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Creates a step that is already done.
    pub fn done(id: impl Into<StepId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: true,
        }
    }
}
