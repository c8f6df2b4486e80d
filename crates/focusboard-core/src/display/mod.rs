//! Display formatting for the board, the focus session and shell feedback.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types in this module add the context-specific views a front end
//! needs. Every formatter emits markdown, which the CLI renders through
//! termimad or prints as-is.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  View Wrappers  │    │    Markdown     │
//! │ (Task, Session) │───▶│ (BoardView, ..) │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`board`]: board and column views
//! - [`session`]: countdown clock, session screen and summary
//! - [`status`]: success and failure messages
//! - [`datetime`]: timestamps in the system time zone
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use focusboard_core::{display::BoardView, store::TaskStore};
//!
//! let store = TaskStore::seeded();
//! let output = BoardView(store.tasks()).to_string();
//! assert!(output.contains("## ○ To Do (3)"));
//! assert!(output.contains("## ➤ In Progress (1)"));
//! ```

pub mod board;
pub mod datetime;
pub mod models;
pub mod session;
pub mod status;

pub use board::{BoardView, ColumnView};
pub use datetime::{LocalDateTime, LocalTime};
pub use session::{Clock, SessionView, SummaryView};
pub use status::OperationStatus;
