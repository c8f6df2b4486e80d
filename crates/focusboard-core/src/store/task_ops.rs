//! Task-level operations for the TaskStore.

use std::sync::Arc;

use super::TaskStore;
use crate::models::{Column, Task, TaskId, TaskPatch};

impl TaskStore {
    /// Moves a task into `column`.
    ///
    /// Any column may follow any other; moving a task into the column it is
    /// already in changes nothing. Unknown ids are ignored.
    pub fn move_task(&mut self, task_id: &TaskId, column: Column) -> Arc<[Task]> {
        self.rewrite_task(task_id, "move_task", |task, _| {
            (task.column != column).then(|| Task {
                column,
                ..task.clone()
            })
        })
    }

    /// Shallow-merges `patch` into the task. Unknown ids are ignored.
    ///
    /// The patch is already typed, so an impact rating outside 1-3 cannot
    /// reach the store.
    pub fn update_task(&mut self, task_id: &TaskId, patch: &TaskPatch) -> Arc<[Task]> {
        self.rewrite_task(task_id, "update_task", |task, _| {
            let patched = task.patched(patch);
            (patched != *task).then_some(patched)
        })
    }
}
