//! Data models for tasks and steps.
//!
//! This module contains the core domain models of the board. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! # Invariants
//!
//! - A step id appears in at most one of a task's `next_steps` and
//!   `completed_steps`, and never twice.
//! - [`ImpactStars`] can only hold 1, 2 or 3.
//! - Every task sits in exactly one [`Column`].
//! - Step order is insertion order; new steps are appended.
//!
//! # Examples
//!
//! ```rust
//! use focusboard_core::models::{Column, ImpactStars, Step, Task};
//!
//! let task = Task::new("task-1", "Write essay", ImpactStars::TWO, Column::Todo)
//!     .with_next_steps(vec![Step::pending("step-1a", "Create outline")]);
//!
//! assert_eq!(task.step_counts(), (0, 1));
//! assert!(task.accepts_new_steps());
//! ```

pub mod column;
pub mod ids;
pub mod impact;
pub mod requests;
pub mod step;
pub mod task;


pub use column::Column;
pub use ids::{StepId, TaskId};
pub use impact::ImpactStars;
pub use requests::TaskPatch;
pub use step::Step;
pub use task::Task;
