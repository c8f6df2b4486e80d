//! Terminal side of the board's outbound notifications.

use focusboard_core::{BoardHooks, Celebration, TaskId};
use log::debug;

/// Collects celebration banners until the shell prints them.
#[derive(Debug, Default)]
pub struct TerminalHooks {
    notices: Vec<String>,
}

impl TerminalHooks {
    /// Takes every notice queued since the last call.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

impl BoardHooks for TerminalHooks {
    fn celebrate(&mut self, celebration: &Celebration) {
        let notice = match celebration {
            Celebration::SessionComplete { task_id } => {
                format!("🎉 **Session complete!** Time is up on `{task_id}`.")
            }
            Celebration::TaskDone { task_id } => format!("🎉 **Done!** `{task_id}` is finished."),
        };
        self.notices.push(notice);
    }

    fn session_closed(&mut self, task_id: &TaskId) {
        debug!("session window for {task_id} closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_are_drained_once() {
        let mut hooks = TerminalHooks::default();
        hooks.celebrate(&Celebration::TaskDone {
            task_id: TaskId::from("task-4"),
        });
        hooks.session_closed(&TaskId::from("task-4"));

        let notices = hooks.drain();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("`task-4` is finished"));
        assert!(hooks.drain().is_empty());
    }
}
