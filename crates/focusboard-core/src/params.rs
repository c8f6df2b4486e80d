//! Parameter structures for focusboard operations
//!
//! These structures carry loosely typed input (plain strings and integers, as
//! they arrive from a command line or a UI form) across the boundary into the
//! core. Each one converts into the strongly typed values the store and the
//! session accept, and that conversion is where user input gets validated.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Shell Args    │    │  Core Params    │    │  Typed Values   │
//! │  (clap derives) │───▶│ (plain fields)  │───▶│ (Column, Patch) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers define their own wrappers with framework derives and
//! convert them with `From` implementations, keeping clap out of the core.

use serde::{Deserialize, Serialize};

use crate::{
    error::{BoardError, Result},
    models::{Column, ImpactStars, StepId, TaskId, TaskPatch},
    session::{DurationStep, EntryKind},
};

/// Parameters for operations requiring just a task id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRef {
    /// The id of the task to operate on
    pub task_id: String,
}

impl TaskRef {
    pub fn id(&self) -> TaskId {
        TaskId::from(self.task_id.as_str())
    }
}

/// Parameters for moving a task to another column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveTask {
    /// Task to move
    pub task_id: String,
    /// Target column (`todo`, `inprogress`, `done`)
    pub column: String,
}

impl MoveTask {
    /// Validate the column name.
    pub fn validate(&self) -> Result<(TaskId, Column)> {
        let column = self.column.parse::<Column>().map_err(|_| {
            BoardError::invalid_input("column").with_reason(format!(
                "Invalid column: {}. Must be 'todo', 'inprogress', or 'done'",
                self.column
            ))
        })?;
        Ok((TaskId::from(self.task_id.as_str()), column))
    }
}

/// Parameters for patching task fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Task to update
    pub task_id: String,
    /// New title
    pub title: Option<String>,
    /// New impact rating (1-3)
    pub impact_stars: Option<u8>,
}

impl UpdateTask {
    /// Validate the fields and build a [`TaskPatch`].
    ///
    /// The impact rating must be 1, 2 or 3 and a new title must not be blank.
    pub fn validate(&self) -> Result<TaskPatch> {
        let impact_stars = self.impact_stars.map(ImpactStars::try_from).transpose()?;

        let title = match &self.title {
            Some(title) if title.trim().is_empty() => {
                return Err(BoardError::invalid_input("title").with_reason("Title cannot be empty"));
            }
            Some(title) => Some(title.trim().to_string()),
            None => None,
        };

        Ok(TaskPatch {
            title,
            impact_stars,
        })
    }

    pub fn id(&self) -> TaskId {
        TaskId::from(self.task_id.as_str())
    }
}

/// Parameters for toggling a pending step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleStep {
    pub task_id: String,
    pub step_id: String,
}

impl ToggleStep {
    pub fn ids(&self) -> (TaskId, StepId) {
        (
            TaskId::from(self.task_id.as_str()),
            StepId::from(self.step_id.as_str()),
        )
    }
}

/// Parameters for appending a pending step to a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddStep {
    pub task_id: String,
    /// Step text; surrounding whitespace is dropped
    pub text: String,
}

impl AddStep {
    /// Reject blank step text.
    pub fn validate(&self) -> Result<(TaskId, String)> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(BoardError::invalid_input("text").with_reason("Step text cannot be empty"));
        }
        Ok((TaskId::from(self.task_id.as_str()), text.to_string()))
    }
}

/// Parameters for changing a focus session's remaining time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjustDuration {
    /// Signed minutes; only ±1 and ±5 are offered by the timer controls
    pub minutes: i64,
}

impl AdjustDuration {
    pub fn validate(&self) -> Result<DurationStep> {
        DurationStep::from_minutes(self.minutes).ok_or_else(|| {
            BoardError::invalid_input("minutes").with_reason(format!(
                "Unsupported adjustment: {}. Must be one of -5, -1, 1, 5",
                self.minutes
            ))
        })
    }
}

/// Parameters for staging a free-text entry in a session summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualEntry {
    pub kind: EntryKind,
    pub text: String,
}
