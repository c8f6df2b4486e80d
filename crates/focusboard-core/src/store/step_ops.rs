//! Step operations for the TaskStore.

use std::{collections::HashSet, sync::Arc};

use super::{StepIds, TaskStore};
use crate::{
    models::{Step, StepId, Task, TaskId},
    session::Reconciliation,
};

impl TaskStore {
    /// Flips `completed` on a pending step.
    ///
    /// Only `next_steps` is searched; entries in `completed_steps` are
    /// terminal and never toggled. Unknown ids are ignored.
    pub fn toggle_step(&mut self, task_id: &TaskId, step_id: &StepId) -> Arc<[Task]> {
        self.rewrite_task(task_id, "toggle_step", |task, _| {
            let index = task.next_steps.iter().position(|step| &step.id == step_id)?;
            let mut next_steps = task.next_steps.clone();
            next_steps[index].completed = !next_steps[index].completed;
            Some(Task {
                next_steps,
                ..task.clone()
            })
        })
    }

    /// Appends a pending step with a freshly generated id.
    ///
    /// Text is trimmed; blank text adds nothing.
    pub fn add_step(&mut self, task_id: &TaskId, text: &str) -> Arc<[Task]> {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("add_step: blank text for task {task_id}, ignoring");
            return self.snapshot();
        }

        self.rewrite_task(task_id, "add_step", |task, ids| {
            let mut next_steps = task.next_steps.clone();
            next_steps.push(Step::pending(ids.next(), text));
            Some(Task {
                next_steps,
                ..task.clone()
            })
        })
    }

    /// Folds the outcome of a focus session into a task's step lists.
    ///
    /// - pending steps whose ids are in `completed_step_ids` move to the end
    ///   of `completed_steps`, flipped to completed, keeping their order;
    /// - `new_next_steps` become fresh pending steps after the remaining
    ///   pending ones;
    /// - `new_completed_steps` become fresh completed steps after the moved
    ///   ones.
    ///
    /// Ids that match no pending step are ignored, as are blank texts.
    /// Unknown tasks are ignored.
    pub fn complete_session_steps(
        &mut self,
        task_id: &TaskId,
        completed_step_ids: &[StepId],
        new_next_steps: &[String],
        new_completed_steps: &[String],
    ) -> Arc<[Task]> {
        self.rewrite_task(task_id, "complete_session_steps", |task, ids| {
            reconcile(task, ids, completed_step_ids, new_next_steps, new_completed_steps)
        })
    }

    /// Applies the message produced by [`crate::FocusSession::finish`].
    pub fn apply(&mut self, reconciliation: &Reconciliation) -> Arc<[Task]> {
        self.complete_session_steps(
            &reconciliation.task_id,
            &reconciliation.completed_step_ids,
            &reconciliation.new_next_steps,
            &reconciliation.new_completed_steps,
        )
    }
}

fn reconcile(
    task: &Task,
    ids: &mut StepIds<'_>,
    completed_step_ids: &[StepId],
    new_next_steps: &[String],
    new_completed_steps: &[String],
) -> Option<Task> {
    let selected: HashSet<&StepId> = completed_step_ids.iter().collect();
    let (moved, remaining): (Vec<Step>, Vec<Step>) = task
        .next_steps
        .iter()
        .cloned()
        .partition(|step| selected.contains(&step.id));

    let fresh_pending: Vec<Step> = non_blank(new_next_steps)
        .map(|text| Step::pending(ids.next(), text))
        .collect();
    let fresh_completed: Vec<Step> = non_blank(new_completed_steps)
        .map(|text| Step::done(ids.next(), text))
        .collect();

    if moved.is_empty() && fresh_pending.is_empty() && fresh_completed.is_empty() {
        return None;
    }

    let mut next_steps = remaining;
    next_steps.extend(fresh_pending);

    let mut completed_steps = task.completed_steps.clone();
    completed_steps.extend(moved.into_iter().map(|step| Step {
        completed: true,
        ..step
    }));
    completed_steps.extend(fresh_completed);

    Some(Task {
        next_steps,
        completed_steps,
        ..task.clone()
    })
}

fn non_blank(texts: &[String]) -> impl Iterator<Item = &str> {
    texts
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
}
