//! Request types for updating models.

use super::ImpactStars;

/// Shallow patch applied by `TaskStore::update_task`.
///
/// Every field is optional; `None` leaves the task's value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub impact_stars: Option<ImpactStars>,
}

impl TaskPatch {
    /// Patch that only changes the impact rating.
    pub fn impact(stars: ImpactStars) -> Self {
        Self {
            impact_stars: Some(stars),
            ..Default::default()
        }
    }

    /// Patch that only renames the task.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// True when applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.impact_stars.is_none()
    }
}

impl TryFrom<crate::params::UpdateTask> for TaskPatch {
    type Error = crate::BoardError;

    /// Validate loosely typed update parameters into a patch.
    ///
    /// ```rust
    /// use focusboard_core::{models::TaskPatch, params::UpdateTask};
    ///
    /// let params = UpdateTask {
    ///     task_id: "task-1".to_string(),
    ///     title: None,
    ///     impact_stars: Some(7),
    /// };
    /// assert!(TaskPatch::try_from(params).is_err());
    /// ```
    fn try_from(params: crate::params::UpdateTask) -> Result<Self, Self::Error> {
        params.validate()
    }
}
