//! Seed tasks the board starts with.
//!
//! Seeds come either from the built-in set below or from a JSON file holding
//! an array of tasks. Seed files are only ever read.

use std::{collections::HashSet, fs, path::Path};

use log::info;

use crate::{
    error::{BoardError, Result},
    models::{Column, ImpactStars, Step, Task},
};

/// The built-in board.
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "task-1",
            "Complete Math Assignment",
            ImpactStars::THREE,
            Column::Todo,
        )
        .with_next_steps(vec![
            Step::pending("step-1a", "Review chapter 5 formulas"),
            Step::pending("step-1b", "Solve practice problems"),
            Step::pending("step-1c", "Check answers"),
        ]),
        Task::new("task-2", "Write English Essay", ImpactStars::TWO, Column::Todo)
            .with_next_steps(vec![
                Step::pending("step-2a", "Create outline"),
                Step::pending("step-2b", "Write introduction"),
                Step::pending("step-2c", "Add supporting paragraphs"),
            ]),
        Task::new("task-3", "Finish coding homework", ImpactStars::TWO, Column::Todo)
            .with_next_steps(vec![
                Step::pending("step-3a", "Debug the login function"),
                Step::pending("step-3b", "Write unit tests"),
            ]),
        Task::new(
            "task-4",
            "Build physics demo",
            ImpactStars::THREE,
            Column::InProgress,
        )
        .with_next_steps(vec![
            Step::pending("step-4a", "Gather materials"),
            Step::pending("step-4b", "Assemble the circuit"),
        ])
        .with_completed_steps(vec![Step::done("step-4c", "Research project topic")]),
        Task::new(
            "task-5",
            "Bake cupcakes for school outing",
            ImpactStars::ONE,
            Column::Done,
        )
        .with_completed_steps(vec![
            Step::done("step-5a", "Buy ingredients"),
            Step::done("step-5b", "Follow recipe"),
            Step::done("step-5c", "Decorate cupcakes"),
        ]),
    ]
}

/// Reads and validates a JSON seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<Task>> {
    let contents = fs::read_to_string(path).map_err(|e| BoardError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    let tasks = parse_seed(&contents)?;
    info!("loaded {} seed tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Parses a JSON array of tasks and checks the board invariants that serde
/// cannot express on its own.
pub fn parse_seed(json: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;
    validate_seed(&tasks)?;
    Ok(tasks)
}

/// Task ids must be unique on the board, step ids unique within a task, and
/// steps sorted into the list matching their `completed` flag.
pub fn validate_seed(tasks: &[Task]) -> Result<()> {
    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(&task.id) {
            return Err(BoardError::invalid_input("id")
                .with_reason(format!("duplicate task id '{}'", task.id)));
        }

        if task.title.trim().is_empty() {
            return Err(BoardError::invalid_input("title")
                .with_reason(format!("task '{}' has an empty title", task.id)));
        }

        let mut step_ids = HashSet::new();
        for step in task.next_steps.iter().chain(task.completed_steps.iter()) {
            if !step_ids.insert(&step.id) {
                return Err(BoardError::invalid_input("steps").with_reason(format!(
                    "step id '{}' appears more than once in task '{}'",
                    step.id, task.id
                )));
            }
            if step.text.trim().is_empty() {
                return Err(BoardError::invalid_input("steps").with_reason(format!(
                    "step '{}' in task '{}' has empty text",
                    step.id, task.id
                )));
            }
        }

        if task.completed_steps.iter().any(|step| !step.completed) {
            return Err(BoardError::invalid_input("completedSteps").with_reason(format!(
                "task '{}' lists an unfinished step as completed",
                task.id
            )));
        }
    }
    Ok(())
}
