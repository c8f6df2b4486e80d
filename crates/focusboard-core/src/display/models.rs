//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to keep presentation logic
//! out of the data structures. Every implementation emits markdown.

use std::fmt;

use crate::models::{Column, ImpactStars, Step, Task};

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for ImpactStars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for star in 1..=ImpactStars::MAX {
            let glyph = if star <= self.get() { '★' } else { '☆' };
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { 'x' } else { ' ' };
        writeln!(f, "- [{mark}] {} `{}`", self.text, self.id)
    }
}

impl Task {
    /// One-line card used inside column listings.
    pub(crate) fn fmt_card(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (completed, total) = self.step_counts();
        let title = if self.is_high_impact() {
            format!("**{}**", self.title)
        } else {
            self.title.clone()
        };
        write!(f, "- `{}` {title} {}", self.id, self.impact_stars)?;
        if total > 0 {
            write!(f, " ({completed}/{total})")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} {}", self.title, self.impact_stars)?;
        writeln!(f)?;

        let (completed, total) = self.step_counts();
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Column: {}", self.column.with_icon())?;
        writeln!(f, "- Progress: {completed}/{total} steps")?;

        if !self.next_steps.is_empty() {
            writeln!(f, "\n### Next steps")?;
            writeln!(f)?;
            for step in &self.next_steps {
                write!(f, "{step}")?;
            }
        } else if self.accepts_new_steps() {
            writeln!(f, "\nNo next steps yet.")?;
        }

        if !self.completed_steps.is_empty() {
            writeln!(f, "\n### Completed")?;
            writeln!(f)?;
            for step in &self.completed_steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::default_tasks;

    #[test]
    fn test_impact_stars_display() {
        assert_eq!(ImpactStars::ONE.to_string(), "★☆☆");
        assert_eq!(ImpactStars::TWO.to_string(), "★★☆");
        assert_eq!(ImpactStars::THREE.to_string(), "★★★");
    }

    #[test]
    fn test_column_display() {
        assert_eq!(Column::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_step_display() {
        assert_eq!(
            Step::pending("step-1a", "Outline").to_string(),
            "- [ ] Outline `step-1a`\n"
        );
        assert_eq!(
            Step::done("step-1b", "Draft").to_string(),
            "- [x] Draft `step-1b`\n"
        );
    }

    #[test]
    fn test_task_display() {
        let tasks = default_tasks();
        let output = tasks[3].to_string();

        assert!(output.starts_with("## Build physics demo ★★★\n"));
        assert!(output.contains("- Column: ➤ In Progress"));
        assert!(output.contains("- Progress: 1/3 steps"));
        assert!(output.contains("### Next steps"));
        assert!(output.contains("- [ ] Gather materials `step-4a`"));
        assert!(output.contains("### Completed"));
        assert!(output.contains("- [x] Research project topic `step-4c`"));
    }

    #[test]
    fn test_done_task_without_next_steps() {
        let tasks = default_tasks();
        let output = tasks[4].to_string();

        assert!(!output.contains("Next steps"));
        assert!(!output.contains("No next steps yet."));
        assert!(output.contains("- Progress: 3/3 steps"));
    }
}
