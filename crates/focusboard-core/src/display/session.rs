//! Display wrappers for the focus session and its summary.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::Task,
    session::{EntryKind, FocusSession, SessionPhase},
};

const PROGRESS_WIDTH: usize = 20;

/// Seconds formatted as a `MM:SS` countdown clock.
///
/// ```rust
/// use focusboard_core::display::Clock;
///
/// assert_eq!(Clock(1200).to_string(), "20:00");
/// assert_eq!(Clock(59).to_string(), "00:59");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub u32);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Text progress bar filled to `fraction` of its width.
struct ProgressBar(f64);

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = self.0.clamp(0.0, 1.0);
        let filled = (fraction * PROGRESS_WIDTH as f64).round() as usize;
        write!(
            f,
            "{}{} {:>3.0}%",
            "█".repeat(filled),
            "░".repeat(PROGRESS_WIDTH - filled),
            fraction * 100.0
        )
    }
}

/// The countdown screen of an open session.
pub struct SessionView<'a> {
    pub session: &'a FocusSession,
    pub task: &'a Task,
}

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.session;
        writeln!(f, "## Focus: {}", self.task.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "**{}** {}",
            Clock(session.remaining_seconds()),
            ProgressBar(session.progress())
        )?;
        writeln!(f)?;
        writeln!(f, "- State: {}", session.phase().as_str())?;
        writeln!(f, "- Length: {}", Clock(session.total_seconds()))?;
        if let Some(started) = session.started_at() {
            writeln!(f, "- Started: {}", LocalDateTime(started).time_only())?;
        }

        let hint = match session.phase() {
            SessionPhase::Ready => "Adjust the length, then `start`.",
            SessionPhase::Running => "`pause` to take a break, `end` to stop early.",
            SessionPhase::Paused => "`pause` again to resume, `end` to stop early.",
            SessionPhase::Ended { .. } => "Review the summary, then `finish`.",
        };
        writeln!(f)?;
        writeln!(f, "{hint}")
    }
}

/// The summary shown after a session ends.
///
/// Pending steps of the task are listed with their selection marks, followed
/// by the manual entries staged so far.
pub struct SummaryView<'a> {
    pub session: &'a FocusSession,
    pub task: &'a Task,
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.session;
        let summary = session.summary();

        writeln!(f, "## Session summary: {}", self.task.title)?;
        writeln!(f)?;
        if session.completed_naturally() {
            writeln!(f, "Session complete! Great focus.")?;
        } else {
            writeln!(
                f,
                "Focused for {} of {}.",
                Clock(session.elapsed_seconds()),
                Clock(session.total_seconds())
            )?;
        }

        writeln!(f, "\n### What did you finish?")?;
        writeln!(f)?;
        if self.task.next_steps.is_empty() {
            writeln!(f, "No pending steps.")?;
        }
        for step in &self.task.next_steps {
            let mark = if summary.is_selected(&step.id) { 'x' } else { ' ' };
            writeln!(f, "- [{mark}] {} `{}`", step.text, step.id)?;
        }

        for (kind, heading) in [
            (EntryKind::Next, "New next steps"),
            (EntryKind::Completed, "Also completed"),
        ] {
            let mut texts = summary.texts(kind).peekable();
            if texts.peek().is_none() {
                continue;
            }
            writeln!(f, "\n### {heading}")?;
            writeln!(f)?;
            for text in texts {
                writeln!(f, "- {text}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{StepId, TaskId},
        store::seed::default_tasks,
    };

    fn math_task() -> Task {
        default_tasks().remove(0)
    }

    #[test]
    fn test_clock_formats_minutes_and_seconds() {
        assert_eq!(Clock(0).to_string(), "00:00");
        assert_eq!(Clock(65).to_string(), "01:05");
        assert_eq!(Clock(3600).to_string(), "60:00");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(
            ProgressBar(0.0).to_string(),
            format!("{}   0%", "░".repeat(PROGRESS_WIDTH))
        );
        assert_eq!(
            ProgressBar(0.5).to_string(),
            format!("{}{}  50%", "█".repeat(10), "░".repeat(10))
        );
        assert_eq!(
            ProgressBar(1.0).to_string(),
            format!("{} 100%", "█".repeat(PROGRESS_WIDTH))
        );
    }

    #[test]
    fn test_session_view_before_start() {
        let task = math_task();
        let session = FocusSession::new(TaskId::from("task-1"));
        let output = SessionView {
            session: &session,
            task: &task,
        }
        .to_string();

        assert!(output.starts_with("## Focus: Complete Math Assignment\n"));
        assert!(output.contains("**20:00**"));
        assert!(output.contains("- State: ready"));
        assert!(!output.contains("Started:"));
    }

    #[test]
    fn test_session_view_while_running() {
        let task = math_task();
        let mut session = FocusSession::new(TaskId::from("task-1"));
        session.start();
        session.tick();

        let output = SessionView {
            session: &session,
            task: &task,
        }
        .to_string();

        assert!(output.contains("**19:59**"));
        assert!(output.contains("- State: running"));
        assert!(output.contains("- Started: "));
    }

    #[test]
    fn test_summary_view_marks_selection_and_entries() {
        let task = math_task();
        let mut session = FocusSession::new(TaskId::from("task-1"));
        session.start();
        session.end_session();
        session.toggle_step_selection(&StepId::from("step-1b"));
        session.add_manual_entry(EntryKind::Next, "Ask about problem 7");

        let output = SummaryView {
            session: &session,
            task: &task,
        }
        .to_string();

        assert!(output.contains("Focused for 00:00 of 20:00."));
        assert!(output.contains("- [ ] Review chapter 5 formulas `step-1a`"));
        assert!(output.contains("- [x] Solve practice problems `step-1b`"));
        assert!(output.contains("### New next steps\n\n- Ask about problem 7"));
        assert!(!output.contains("Also completed"));
    }
}
