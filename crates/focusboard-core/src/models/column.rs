//! Board column enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the three board columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// Work that has not been started
    #[default]
    Todo,

    /// Work that is currently being done
    InProgress,

    /// Finished work
    Done,
}

impl Column {
    /// All columns in board order, left to right.
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    /// Identifier used in seed files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "inProgress",
            Column::Done => "done",
        }
    }

    /// Human readable column heading.
    pub fn title(&self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }

    /// Get the column title with a consistent icon prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focusboard_core::models::Column;
    ///
    /// assert_eq!(Column::Todo.with_icon(), "○ To Do");
    /// assert_eq!(Column::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(Column::Done.with_icon(), "✓ Done");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Column::Todo => "○ To Do",
            Column::InProgress => "➤ In Progress",
            Column::Done => "✓ Done",
        }
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" | "to-do" | "to_do" => Ok(Column::Todo),
            "inprogress" | "in_progress" | "in-progress" | "doing" => Ok(Column::InProgress),
            "done" => Ok(Column::Done),
            _ => Err(format!("Invalid column: {s}")),
        }
    }
}
