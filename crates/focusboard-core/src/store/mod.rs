//! In-memory task store.
//!
//! The [`TaskStore`] owns every task on the board. It is constructed once,
//! at application start, and handed to whoever needs it; there is no global
//! instance.
//!
//! # Snapshots
//!
//! Tasks are held in an immutable `Arc<[Task]>` snapshot. Each mutating
//! operation builds a new snapshot and returns it, leaving previously handed
//! out snapshots untouched. When an operation matches nothing (unknown task
//! id, unknown step id, a move into the column the task is already in) the
//! current snapshot is returned as is, so callers can detect "nothing
//! changed" with [`Arc::ptr_eq`]:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use focusboard_core::{models::{Column, TaskId}, TaskStore};
//!
//! let mut store = TaskStore::seeded();
//! let before = store.snapshot();
//!
//! let after = store.move_task(&TaskId::from("no-such-task"), Column::Done);
//! assert!(Arc::ptr_eq(&before, &after));
//!
//! let after = store.move_task(&TaskId::from("task-1"), Column::Done);
//! assert!(!Arc::ptr_eq(&before, &after));
//! assert_eq!(before[0].column, Column::Todo);
//! ```
//!
//! # Failure policy
//!
//! Operations are total: unknown ids are absorbed silently. Validation of
//! loosely typed input happens earlier, in [`crate::params`].

use std::sync::Arc;

use log::debug;

use crate::{
    error::{BoardError, Result},
    models::{Column, StepId, Task, TaskId},
};

pub mod seed;
pub mod step_ops;
pub mod task_ops;


/// Monotonic generator for step ids.
///
/// Produces `step-N` and skips any candidate already present anywhere in the
/// store, so generated ids never collide with seeded ids either.
#[derive(Debug, Clone, Default)]
pub(crate) struct StepIdGenerator {
    last: u64,
}

impl StepIdGenerator {
    pub(crate) fn next_unused(&mut self, tasks: &[Task]) -> StepId {
        loop {
            self.last += 1;
            let candidate = format!("step-{}", self.last);
            if !tasks.iter().any(|task| task.has_step_id(&candidate)) {
                return StepId::from(candidate);
            }
        }
    }
}

/// Step id allocation handed to task rewrites.
pub(crate) struct StepIds<'a> {
    generator: &'a mut StepIdGenerator,
    tasks: &'a [Task],
}

impl StepIds<'_> {
    pub(crate) fn next(&mut self) -> StepId {
        self.generator.next_unused(self.tasks)
    }
}

/// Owner of the board's task collection.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Arc<[Task]>,
    step_ids: StepIdGenerator,
}

impl TaskStore {
    /// Creates a store holding the given tasks in the given order.
    pub fn new(tasks: Vec<Task>) -> Self {
        debug!("task store created with {} tasks", tasks.len());
        Self {
            tasks: tasks.into(),
            step_ids: StepIdGenerator::default(),
        }
    }

    /// Creates a store holding the built-in seed tasks.
    pub fn seeded() -> Self {
        Self::new(seed::default_tasks())
    }

    /// Current snapshot of every task, in board order.
    pub fn snapshot(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    /// Borrow the current tasks.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks on the board.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id.
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == task_id)
    }

    /// Looks up a task by id, turning a miss into [`BoardError::TaskNotFound`].
    ///
    /// Mutations never need this; it exists for front ends that want to tell
    /// the user about a typo.
    pub fn require_task(&self, task_id: &TaskId) -> Result<&Task> {
        self.task(task_id)
            .ok_or_else(|| BoardError::task_not_found(task_id.as_str()))
    }

    /// Tasks in the given column, preserving board order.
    pub fn tasks_by_column(&self, column: Column) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.column == column)
            .collect()
    }

    /// Replaces one task with the result of `rewrite`.
    ///
    /// Returns the unchanged snapshot when the task is missing or when
    /// `rewrite` reports no change by returning `None`.
    pub(crate) fn rewrite_task<F>(&mut self, task_id: &TaskId, op: &str, rewrite: F) -> Arc<[Task]>
    where
        F: FnOnce(&Task, &mut StepIds<'_>) -> Option<Task>,
    {
        let Some(index) = self.tasks.iter().position(|task| &task.id == task_id) else {
            debug!("{op}: task {task_id} not found, ignoring");
            return self.snapshot();
        };

        let mut ids = StepIds {
            generator: &mut self.step_ids,
            tasks: &self.tasks[..],
        };
        let Some(updated) = rewrite(&self.tasks[index], &mut ids) else {
            debug!("{op}: nothing to change on task {task_id}");
            return self.snapshot();
        };

        let mut next = self.tasks.to_vec();
        next[index] = updated;
        self.tasks = next.into();
        debug!("{op}: task {task_id} updated");
        self.snapshot()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::seeded()
    }
}
