//! Wrapper types for displaying the board and its columns.
//!
//! Columns list each task as a one-line card; the full card with its steps
//! is the task's own `Display`.

use std::fmt;

use crate::models::{Column, Task};

/// One column of the board.
///
/// # Examples
///
/// ```rust
/// use focusboard_core::{display::ColumnView, models::Column, store::TaskStore};
///
/// let store = TaskStore::seeded();
/// let view = ColumnView::new(Column::Done, store.tasks());
/// let output = view.to_string();
/// assert!(output.starts_with("## ✓ Done (1)"));
/// assert!(output.contains("Bake cupcakes for school outing"));
/// ```
pub struct ColumnView<'a> {
    column: Column,
    tasks: Vec<&'a Task>,
}

impl<'a> ColumnView<'a> {
    /// Picks the tasks of `column` out of a full task list.
    pub fn new(column: Column, tasks: &'a [Task]) -> Self {
        Self {
            column,
            tasks: tasks.iter().filter(|task| task.column == column).collect(),
        }
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl fmt::Display for ColumnView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.column.with_icon(), self.tasks.len())?;
        writeln!(f)?;
        if self.tasks.is_empty() {
            writeln!(f, "No tasks.")?;
        } else {
            for task in &self.tasks {
                task.fmt_card(f)?;
            }
        }
        Ok(())
    }
}

/// The whole board, one section per column in board order.
pub struct BoardView<'a>(pub &'a [Task]);

impl BoardView<'_> {
    /// Column views in To Do, In Progress, Done order.
    pub fn columns(&self) -> impl Iterator<Item = ColumnView<'_>> {
        Column::ALL
            .into_iter()
            .map(|column| ColumnView::new(column, self.0))
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Board")?;
        for column in self.columns() {
            writeln!(f)?;
            write!(f, "{column}")?;
        }
        Ok(())
    }
}
