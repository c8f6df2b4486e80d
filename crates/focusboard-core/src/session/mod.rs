//! Focus session state machine.
//!
//! A [`FocusSession`] is a timed work interval on one task. It only knows the
//! task by id; the task store never sees the session's staged edits until the
//! session is finished and its [`Reconciliation`] message is applied.
//!
//! ```text
//!            start / toggle        toggle
//!   Ready ───────────────▶ Running ◀──────▶ Paused
//!     │                      │                │
//!     │ close (not started)  │ tick to 0      │ end / close
//!     ▼                      ▼                ▼
//!  Discarded          Ended { natural }  Ended { manual }
//!                            │
//!                            │ finish
//!                            ▼
//!                      Reconciliation
//! ```
//!
//! The session itself is synchronous; the one-second countdown is driven from
//! outside through [`FocusSession::tick`], normally by a [`timer::SessionTimer`]
//! owned by [`crate::FocusBoard`].
//!
//! # Examples
//!
//! ```rust
//! use focusboard_core::{
//!     models::{StepId, TaskId},
//!     session::{EntryKind, FocusSession, SessionPhase},
//! };
//!
//! let mut session = FocusSession::new(TaskId::from("task-1"));
//! assert_eq!(session.remaining_seconds(), 1200);
//!
//! session.start();
//! session.tick();
//! assert_eq!(session.remaining_seconds(), 1199);
//!
//! session.end_session();
//! assert_eq!(session.phase(), SessionPhase::Ended { natural: false });
//!
//! session.toggle_step_selection(&StepId::from("step-1a"));
//! session.add_manual_entry(EntryKind::Next, "  Check answers again ");
//!
//! let message = session.finish().expect("session has ended");
//! assert_eq!(message.completed_step_ids, vec![StepId::from("step-1a")]);
//! assert_eq!(message.new_next_steps, vec!["Check answers again".to_string()]);
//! ```

use jiff::Timestamp;
use log::debug;

use crate::models::{StepId, TaskId};

pub mod duration;
pub mod summary;
pub mod timer;

#[cfg(test)]
mod tests;

pub use duration::{DurationStep, DEFAULT_FOCUS_SECONDS, MIN_FOCUS_SECONDS};
pub use summary::{EntryKind, Reconciliation, SessionSummary, StagedEntry};
pub use timer::{SessionTimer, TimerTick, TICK_PERIOD};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Opened but the countdown has not been started
    Ready,
    /// Countdown running
    Running,
    /// Countdown started and currently paused
    Paused,
    /// Countdown over; the summary is being edited
    Ended {
        /// True when the timer ran out, false when the user stopped early
        natural: bool,
    },
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Ready => "ready",
            SessionPhase::Running => "running",
            SessionPhase::Paused => "paused",
            SessionPhase::Ended { natural: true } => "complete",
            SessionPhase::Ended { natural: false } => "ended",
        }
    }
}

/// What a close request (escape key, backdrop click, close button) resolves
/// to for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Never started: throw the session away without touching the task
    Discard,
    /// Was running or paused: the session has been ended and the summary
    /// should be shown
    ShowSummary,
    /// Already on the summary: save and close
    Finish,
}

/// A timed work interval on one task.
#[derive(Debug, Clone)]
pub struct FocusSession {
    task_id: TaskId,
    total_seconds: u32,
    remaining_seconds: u32,
    phase: SessionPhase,
    started_at: Option<Timestamp>,
    ended_at: Option<Timestamp>,
    summary: SessionSummary,
    celebration_fired: bool,
}

impl FocusSession {
    /// Opens a session of the default twenty minutes.
    pub fn new(task_id: TaskId) -> Self {
        Self::with_duration(task_id, DEFAULT_FOCUS_SECONDS)
    }

    /// Opens a session with a custom initial length, floored at one minute.
    pub fn with_duration(task_id: TaskId, seconds: u32) -> Self {
        let seconds = seconds.max(MIN_FOCUS_SECONDS);
        debug!("focus session opened on {task_id} for {seconds}s");
        Self {
            task_id,
            total_seconds: seconds,
            remaining_seconds: seconds,
            phase: SessionPhase::Ready,
            started_at: None,
            ended_at: None,
            summary: SessionSummary::default(),
            celebration_fired: false,
        }
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// True only while the countdown is actively running.
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// True once the countdown has been started at least once.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, SessionPhase::Ended { .. })
    }

    /// True when the session ended because the timer ran out.
    pub fn completed_naturally(&self) -> bool {
        self.phase == SessionPhase::Ended { natural: true }
    }

    pub fn started_at(&self) -> Option<&Timestamp> {
        self.started_at.as_ref()
    }

    pub fn ended_at(&self) -> Option<&Timestamp> {
        self.ended_at.as_ref()
    }

    /// Seconds counted down so far.
    pub fn elapsed_seconds(&self) -> u32 {
        self.total_seconds - self.remaining_seconds
    }

    /// Fraction of the session elapsed, always within `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        f64::from(self.elapsed_seconds()) / f64::from(self.total_seconds)
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Changes the remaining time by one of the adjustment buttons.
    ///
    /// Allowed before the session has ended. A decrease that cannot lower the
    /// remaining time any further is rejected. Before the first start the total
    /// follows the remaining time, so progress stays at zero. Afterwards the
    /// total only ever grows, so progress never jumps backwards.
    pub fn adjust_duration(&mut self, step: DurationStep) -> bool {
        if self.is_ended() {
            debug!("adjust_duration ignored: session on {} has ended", self.task_id);
            return false;
        }

        let Some(remaining) = step.apply(self.remaining_seconds) else {
            debug!(
                "adjust_duration {:?} rejected: {}s remaining is at the floor",
                step, self.remaining_seconds
            );
            return false;
        };
        self.remaining_seconds = remaining;
        if self.is_started() {
            self.total_seconds = self.total_seconds.max(self.remaining_seconds);
        } else {
            self.total_seconds = self.remaining_seconds;
        }
        debug!(
            "adjust_duration {:?}: {}s of {}s remaining",
            step, self.remaining_seconds, self.total_seconds
        );
        true
    }

    /// Starts the countdown from `Ready`.
    ///
    /// A session with no time left goes straight to a natural end.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::Ready {
            return false;
        }

        self.started_at = Some(Timestamp::now());
        if self.remaining_seconds == 0 {
            self.finish_countdown(true);
        } else {
            self.phase = SessionPhase::Running;
            debug!("focus session on {} started", self.task_id);
        }
        true
    }

    /// The play/pause button: starts a ready session, otherwise flips between
    /// running and paused. Remaining time is untouched.
    pub fn toggle_running(&mut self) -> bool {
        match self.phase {
            SessionPhase::Ready => self.start(),
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                debug!("focus session on {} paused", self.task_id);
                true
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Running;
                debug!("focus session on {} resumed", self.task_id);
                true
            }
            SessionPhase::Ended { .. } => false,
        }
    }

    /// One second of countdown. Returns true when this tick ended the
    /// session.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() || self.remaining_seconds == 0 {
            return false;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.finish_countdown(true);
            return true;
        }
        false
    }

    /// The stop button: ends the session early and shows the summary.
    pub fn end_session(&mut self) -> bool {
        if self.is_ended() {
            return false;
        }
        self.finish_countdown(false);
        true
    }

    /// Resolves a close request against the current phase.
    ///
    /// A running or paused session is ended rather than thrown away, so
    /// in-progress work always reaches the summary.
    pub fn close_request(&mut self) -> CloseAction {
        match self.phase {
            SessionPhase::Ready => CloseAction::Discard,
            SessionPhase::Running | SessionPhase::Paused => {
                self.finish_countdown(false);
                CloseAction::ShowSummary
            }
            SessionPhase::Ended { .. } => CloseAction::Finish,
        }
    }

    /// Marks or unmarks a pending step as done during this session.
    ///
    /// Only possible on the summary.
    pub fn toggle_step_selection(&mut self, step_id: &StepId) -> bool {
        if !self.is_ended() {
            return false;
        }
        let selected = self.summary.toggle_selection(step_id);
        debug!("step {step_id} selected: {selected}");
        true
    }

    /// Stages a new pending or completed step. Blank text is rejected, as is
    /// any edit before the summary.
    pub fn add_manual_entry(&mut self, kind: EntryKind, text: &str) -> bool {
        self.is_ended() && self.summary.add_entry(kind, text)
    }

    /// Returns true exactly once, and only for a session that ran to zero.
    ///
    /// Callers fire the celebration when this returns true; re-rendering the
    /// summary can call it as often as it likes.
    pub fn claim_celebration(&mut self) -> bool {
        if self.completed_naturally() && !self.celebration_fired {
            self.celebration_fired = true;
            true
        } else {
            false
        }
    }

    /// Closes the session and produces the message for the task store.
    ///
    /// Only an ended session can be finished; any other phase yields `None`.
    pub fn finish(self) -> Option<Reconciliation> {
        if !self.is_ended() {
            debug!(
                "finish ignored: session on {} is {}",
                self.task_id,
                self.phase.as_str()
            );
            return None;
        }
        debug!(
            "focus session on {} finished after {}s",
            self.task_id,
            self.elapsed_seconds()
        );
        Some(self.summary.into_reconciliation(self.task_id))
    }

    fn finish_countdown(&mut self, natural: bool) {
        self.phase = SessionPhase::Ended { natural };
        self.ended_at = Some(Timestamp::now());
        debug!(
            "focus session on {} ended ({})",
            self.task_id,
            self.phase.as_str()
        );
    }
}
