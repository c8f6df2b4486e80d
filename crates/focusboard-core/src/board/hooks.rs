//! Outbound notifications from the board to its presentation layer.

use crate::models::TaskId;

/// Presentation-only effects the board asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Celebration {
    /// A focus session ran its timer down to zero
    SessionComplete { task_id: TaskId },
    /// A task was moved into the Done column
    TaskDone { task_id: TaskId },
}

/// Callbacks into whatever renders the board.
///
/// Both calls are fire-and-forget; nothing they return is consumed and they
/// have no bearing on the data.
pub trait BoardHooks {
    /// Show a celebratory effect.
    fn celebrate(&mut self, _celebration: &Celebration) {}

    /// The focus session on `task_id` has closed, saved or discarded.
    fn session_closed(&mut self, _task_id: &TaskId) {}
}

/// Hooks that ignore every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl BoardHooks for NoopHooks {}
