//! Task model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Column, ImpactStars, Step, StepId, TaskId, TaskPatch};

/// A unit of work tracked on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Globally unique identifier
    pub id: TaskId,

    /// Short title shown on the card
    pub title: String,

    /// Manual impact rating
    pub impact_stars: ImpactStars,

    /// Pending steps in insertion order
    #[serde(default)]
    pub next_steps: Vec<Step>,

    /// Completed steps in completion order
    #[serde(default)]
    pub completed_steps: Vec<Step>,

    /// Column the task currently sits in
    #[serde(default)]
    pub column: Column,
}

impl Task {
    /// Creates a task without any steps.
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        impact_stars: ImpactStars,
        column: Column,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            impact_stars,
            next_steps: Vec::new(),
            completed_steps: Vec::new(),
            column,
        }
    }

    /// Builder-style helper to attach pending steps.
    pub fn with_next_steps(mut self, steps: Vec<Step>) -> Self {
        self.next_steps = steps;
        self
    }

    /// Builder-style helper to attach completed steps.
    pub fn with_completed_steps(mut self, steps: Vec<Step>) -> Self {
        self.completed_steps = steps;
        self
    }

    /// Three-star tasks are highlighted on the board.
    pub fn is_high_impact(&self) -> bool {
        self.impact_stars == ImpactStars::THREE
    }

    /// Finished tasks do not offer "add step".
    pub fn accepts_new_steps(&self) -> bool {
        self.column != Column::Done
    }

    /// Returns `(completed, total)` step counts.
    pub fn step_counts(&self) -> (usize, usize) {
        let completed = self.completed_steps.len();
        (completed, completed + self.next_steps.len())
    }

    /// Looks up a step in either list.
    pub fn find_step(&self, step_id: &StepId) -> Option<&Step> {
        self.next_steps
            .iter()
            .chain(self.completed_steps.iter())
            .find(|step| &step.id == step_id)
    }

    /// True if any step of this task already uses the id.
    pub fn has_step_id(&self, step_id: &str) -> bool {
        self.next_steps
            .iter()
            .chain(self.completed_steps.iter())
            .any(|step| step.id == step_id)
    }

    /// Returns a copy with the patch's fields merged in.
    pub fn patched(&self, patch: &TaskPatch) -> Self {
        let mut task = self.clone();
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(stars) = patch.impact_stars {
            task.impact_stars = stars;
        }
        task
    }
}
