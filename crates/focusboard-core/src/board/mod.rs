//! Board controller tying the task store and the focus session together.
//!
//! A UI talks to a [`FocusBoard`]: it forwards card gestures to the store,
//! owns the single "active focus session" slot, keeps the countdown timer
//! alive exactly while the session is running, and relays presentation
//! effects through [`BoardHooks`].
//!
//! ```text
//! ┌──────────────┐  gestures   ┌──────────────┐  Reconciliation  ┌──────────────┐
//! │   Front end  │────────────▶│  FocusBoard  │─────────────────▶│  TaskStore   │
//! │ (shell, GUI) │◀────────────│ session slot │                  │  snapshots   │
//! └──────────────┘   hooks     └──────────────┘                  └──────────────┘
//!                                     ▲
//!                                     │ TimerTick
//!                              ┌──────────────┐
//!                              │ SessionTimer │
//!                              └──────────────┘
//! ```
//!
//! Timer ticks arrive on a channel the front end drains (see
//! [`FocusBoard::take_tick_receiver`]) and feeds back through
//! [`FocusBoard::handle_tick`], so every mutation still happens on the front
//! end's own event loop.

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    models::{Column, StepId, Task, TaskId, TaskPatch},
    session::{
        CloseAction, DurationStep, EntryKind, FocusSession, SessionTimer, TimerTick,
        DEFAULT_FOCUS_SECONDS,
    },
    store::TaskStore,
};

pub mod builder;
pub mod hooks;


pub use builder::BoardBuilder;
pub use hooks::{BoardHooks, Celebration, NoopHooks};

/// Where a dragged card was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Onto a column
    Column(Column),
    /// Onto another card; the task lands in that card's column
    Task(TaskId),
}

/// Result of a close request on the focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// There was no open session
    NoSession,
    /// The session was never started and has been thrown away
    Discarded,
    /// The session was ended; its summary is now showing
    SummaryShown,
    /// The summary was saved into the task and the session closed
    Finished,
}

/// Task board with a single focus session slot.
pub struct FocusBoard<H = NoopHooks> {
    store: TaskStore,
    session: Option<FocusSession>,
    timer: Option<SessionTimer>,
    timer_generation: u64,
    ticks_tx: UnboundedSender<TimerTick>,
    ticks_rx: Option<UnboundedReceiver<TimerTick>>,
    focus_seconds: u32,
    hooks: H,
}

impl FocusBoard<NoopHooks> {
    /// Creates a board without presentation hooks.
    pub fn new(store: TaskStore) -> Self {
        Self::with_hooks(store, NoopHooks)
    }
}

impl<H: BoardHooks> FocusBoard<H> {
    /// Creates a board that reports effects to `hooks`.
    pub fn with_hooks(store: TaskStore, hooks: H) -> Self {
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        Self {
            store,
            session: None,
            timer: None,
            timer_generation: 0,
            ticks_tx,
            ticks_rx: Some(ticks_rx),
            focus_seconds: DEFAULT_FOCUS_SECONDS,
            hooks,
        }
    }

    /// Sets the initial length of sessions opened from now on.
    pub fn set_focus_seconds(&mut self, seconds: u32) {
        self.focus_seconds = seconds;
    }

    pub fn focus_seconds(&self) -> u32 {
        self.focus_seconds
    }

    /// Hands out the receiving end of the timer channel. Only the first call
    /// returns `Some`.
    pub fn take_tick_receiver(&mut self) -> Option<UnboundedReceiver<TimerTick>> {
        self.ticks_rx.take()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Current snapshot of every task.
    pub fn tasks(&self) -> Arc<[Task]> {
        self.store.snapshot()
    }

    pub fn tasks_by_column(&self, column: Column) -> Vec<&Task> {
        self.store.tasks_by_column(column)
    }

    pub fn move_task(&mut self, task_id: &TaskId, column: Column) -> Arc<[Task]> {
        self.store.move_task(task_id, column)
    }

    pub fn update_task(&mut self, task_id: &TaskId, patch: &TaskPatch) -> Arc<[Task]> {
        self.store.update_task(task_id, patch)
    }

    pub fn toggle_step(&mut self, task_id: &TaskId, step_id: &StepId) -> Arc<[Task]> {
        self.store.toggle_step(task_id, step_id)
    }

    pub fn add_step(&mut self, task_id: &TaskId, text: &str) -> Arc<[Task]> {
        self.store.add_step(task_id, text)
    }

    /// Handles the end of a drag.
    ///
    /// The target column comes from the drop target; nothing happens when it
    /// cannot be resolved or equals the task's current column. A task landing
    /// in Done is celebrated.
    pub fn drop_task(&mut self, task_id: &TaskId, target: &DropTarget) -> Arc<[Task]> {
        let Some(current) = self.store.task(task_id).map(|task| task.column) else {
            debug!("drop_task: task {task_id} not found");
            return self.store.snapshot();
        };

        let column = match target {
            DropTarget::Column(column) => *column,
            DropTarget::Task(other) => match self.store.task(other) {
                Some(task) => task.column,
                None => {
                    debug!("drop_task: drop target {other} not found");
                    return self.store.snapshot();
                }
            },
        };

        if column == current {
            return self.store.snapshot();
        }

        let tasks = self.store.move_task(task_id, column);
        if column == Column::Done {
            self.hooks.celebrate(&Celebration::TaskDone {
                task_id: task_id.clone(),
            });
        }
        tasks
    }

    /// The open focus session, if any.
    pub fn session(&self) -> Option<&FocusSession> {
        self.session.as_ref()
    }

    /// The task the open focus session works on.
    pub fn session_task(&self) -> Option<&Task> {
        self.session
            .as_ref()
            .and_then(|session| self.store.task(session.task_id()))
    }

    /// True while a countdown timer is alive.
    pub fn timer_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Opens a focus session on a task.
    ///
    /// Returns false when the task does not exist or another session is
    /// already open.
    pub fn start_focus(&mut self, task_id: &TaskId) -> bool {
        if let Some(open) = &self.session {
            debug!(
                "start_focus: session on {} already open, ignoring {task_id}",
                open.task_id()
            );
            return false;
        }
        if self.store.task(task_id).is_none() {
            debug!("start_focus: task {task_id} not found");
            return false;
        }

        info!("focus session opened on {task_id}");
        self.session = Some(FocusSession::with_duration(
            task_id.clone(),
            self.focus_seconds,
        ));
        true
    }

    /// Starts the countdown of the open session.
    ///
    /// # Panics
    ///
    /// Spawns the session timer when the countdown starts running, which
    /// panics outside a tokio runtime.
    pub fn start_session(&mut self) -> bool {
        self.transition(FocusSession::start)
    }

    /// Play/pause.
    ///
    /// # Panics
    ///
    /// Spawns the session timer when the countdown starts running, which
    /// panics outside a tokio runtime.
    pub fn toggle_session(&mut self) -> bool {
        self.transition(FocusSession::toggle_running)
    }

    /// Changes the remaining time of the open session.
    ///
    /// Returns false once the session has ended, or for a decrease when the
    /// clock is already at the one-minute floor.
    ///
    /// # Panics
    ///
    /// Spawns the session timer when the countdown starts running, which
    /// panics outside a tokio runtime.
    pub fn adjust_session(&mut self, step: DurationStep) -> bool {
        self.transition(|session| session.adjust_duration(step))
    }

    /// Ends the open session early and shows its summary.
    pub fn end_session(&mut self) -> bool {
        self.transition(FocusSession::end_session)
    }

    /// Close request from any source: escape key, close button or backdrop.
    pub fn close_session(&mut self) -> CloseOutcome {
        let Some(session) = self.session.as_mut() else {
            return CloseOutcome::NoSession;
        };

        match session.close_request() {
            CloseAction::Discard => {
                if let Some(session) = self.session.take() {
                    info!("focus session on {} discarded", session.task_id());
                    self.sync_timer();
                    self.hooks.session_closed(session.task_id());
                }
                CloseOutcome::Discarded
            }
            CloseAction::ShowSummary => {
                self.sync_timer();
                CloseOutcome::SummaryShown
            }
            CloseAction::Finish => {
                self.finish_session();
                CloseOutcome::Finished
            }
        }
    }

    /// Selects or deselects one of the task's pending steps on the summary.
    ///
    /// Ids that are not currently pending on the session's task are ignored.
    pub fn select_session_step(&mut self, step_id: &StepId) -> bool {
        let is_pending = self
            .session_task()
            .is_some_and(|task| task.next_steps.iter().any(|step| &step.id == step_id));
        if !is_pending {
            debug!("select_session_step: {step_id} is not a pending step");
            return false;
        }
        self.transition(|session| session.toggle_step_selection(step_id))
    }

    /// Stages a free-text entry on the summary.
    pub fn add_session_entry(&mut self, kind: EntryKind, text: &str) -> bool {
        self.transition(|session| session.add_manual_entry(kind, text))
    }

    /// Saves the summary into the task and closes the session.
    ///
    /// Returns the new task snapshot, or `None` when no session is open or
    /// the open one has not ended yet.
    pub fn finish_session(&mut self) -> Option<Arc<[Task]>> {
        if !self.session.as_ref().is_some_and(FocusSession::is_ended) {
            debug!("finish_session ignored: no ended session");
            return None;
        }
        let session = self.session.take()?;
        self.sync_timer();

        let task_id = session.task_id().clone();
        let reconciliation = session.finish()?;
        info!(
            "focus session on {task_id} saved: {} steps done, {} new next, {} new completed",
            reconciliation.completed_step_ids.len(),
            reconciliation.new_next_steps.len(),
            reconciliation.new_completed_steps.len()
        );
        let tasks = self.store.apply(&reconciliation);
        self.hooks.session_closed(&task_id);
        Some(tasks)
    }

    /// Feeds one timer tick into the open session.
    ///
    /// Ticks from a timer that has since been cancelled are dropped. Returns
    /// true when this tick ran the session out.
    pub fn handle_tick(&mut self, tick: TimerTick) -> bool {
        let live = self
            .timer
            .as_ref()
            .is_some_and(|timer| timer.generation() == tick.generation);
        if !live {
            debug!("stale tick from timer {} ignored", tick.generation);
            return false;
        }

        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let expired = session.tick();
        if expired {
            info!("focus session on {} completed", session.task_id());
            self.sync_timer();
            self.summary_shown();
        }
        expired
    }

    /// Called whenever the summary is displayed. Fires the completion
    /// celebration the first time only.
    pub fn summary_shown(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.claim_celebration() {
            let celebration = Celebration::SessionComplete {
                task_id: session.task_id().clone(),
            };
            self.hooks.celebrate(&celebration);
        }
    }

    fn transition<F>(&mut self, apply: F) -> bool
    where
        F: FnOnce(&mut FocusSession) -> bool,
    {
        let applied = self.session.as_mut().is_some_and(apply);
        self.sync_timer();
        if self.session.as_ref().is_some_and(FocusSession::is_ended) {
            self.summary_shown();
        }
        applied
    }

    /// Keeps a timer alive exactly while the session is running.
    fn sync_timer(&mut self) {
        let running = self.session.as_ref().is_some_and(FocusSession::is_running);
        match (running, self.timer.is_some()) {
            (true, false) => {
                self.timer_generation += 1;
                self.timer = Some(SessionTimer::spawn(
                    self.timer_generation,
                    self.ticks_tx.clone(),
                ));
            }
            (false, true) => {
                self.timer = None;
            }
            _ => {}
        }
    }
}
