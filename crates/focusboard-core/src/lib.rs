//! Core library for the Focusboard task board.
//!
//! This crate provides a three-column kanban board whose tasks carry an impact
//! rating and sub-steps, together with a timed focus session that reconciles
//! its outcome back into the task's steps. Everything lives in memory; the
//! board starts from a seed and nothing is written back.
//!
//! # Architecture
//!
//! - **Data model** ([`models`]): tasks, steps, columns and impact ratings
//! - **Task store** ([`store`]): immutable snapshots, one mutation per call
//! - **Focus session** ([`session`]): the countdown state machine and its
//!   summary
//! - **Board controller** ([`board`]): the store, the single session slot and
//!   the countdown timer behind one API
//! - **Display** ([`display`]): markdown views rendered by the CLI
//!
//! # Quick Start
//!
//! The countdown runs on a tokio task, so starting, resuming or adjusting a
//! session must happen inside a tokio runtime.
//!
//! ```rust
//! use focusboard_core::{BoardBuilder, CloseOutcome, EntryKind, TaskId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = BoardBuilder::new()
//!     .without_config_seed()
//!     .with_focus_minutes(25)
//!     .build()
//!     .await?;
//!
//! let task = TaskId::from("task-1");
//! board.start_focus(&task);
//! board.start_session();
//!
//! // Closing a running session ends it and shows the summary
//! assert_eq!(board.close_session(), CloseOutcome::SummaryShown);
//! board.add_session_entry(EntryKind::Completed, "Read the chapter");
//!
//! // Closing again saves the summary into the task
//! assert_eq!(board.close_session(), CloseOutcome::Finished);
//! let task = board.store().require_task(&task)?;
//! assert_eq!(task.completed_steps.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use board::{
    BoardBuilder, BoardHooks, Celebration, CloseOutcome, DropTarget, FocusBoard, NoopHooks,
};
pub use display::{BoardView, Clock, ColumnView, OperationStatus, SessionView, SummaryView};
pub use error::{BoardError, Result};
pub use models::{Column, ImpactStars, Step, StepId, Task, TaskId, TaskPatch};
pub use session::{
    CloseAction, DurationStep, EntryKind, FocusSession, Reconciliation, SessionPhase, TimerTick,
};
pub use store::TaskStore;
