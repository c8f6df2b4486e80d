//! Shell command definitions using clap
//!
//! Every line typed into the interactive shell is split into words and parsed
//! with clap in `multicall` mode, so the first word names the command the
//! same way a binary name would. Trailing free text of `rename`, `add`,
//! `next` and `done` is passed as a single word, spacing intact.
//!
//! ```text
//! Shell line → ShellLine (clap) → Core Params → FocusBoard
//! ```
//!
//! The argument structs here carry the clap derives; each converts into a
//! plain parameter struct from `focusboard_core::params`, which is where the
//! input gets validated. That keeps clap out of the core crate.

use std::fmt;

use clap::{Args, Parser, Subcommand, ValueEnum};
use focusboard_core::{
    params::{AddStep, AdjustDuration, ManualEntry, MoveTask, TaskRef, ToggleStep, UpdateTask},
    Column, EntryKind, StepId,
};

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Everything the shell understands.
#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    Board(BoardCommand),
    #[command(flatten)]
    Session(SessionCommand),
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Commands working on the board itself.
#[derive(Subcommand, Debug)]
pub enum BoardCommand {
    /// Show all three columns
    #[command(alias = "ls")]
    Board,
    /// Show one task with its steps
    Show(TaskArgs),
    /// Move a task to another column
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Change a task's impact rating
    Impact(ImpactArgs),
    /// Change a task's title
    Rename(RenameArgs),
    /// Check or uncheck a pending step
    Toggle(ToggleArgs),
    /// Append a pending step to a task
    Add(AddArgs),
    /// Open a focus session on a task
    Focus(TaskArgs),
}

/// Commands working on the open focus session.
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Start the countdown
    Start,
    /// Pause or resume the countdown
    #[command(alias = "resume")]
    Pause,
    /// Change the remaining time by -5, -1, +1 or +5 minutes
    Adjust(AdjustArgs),
    /// Show the countdown or the summary
    Status,
    /// Stop the session early and show the summary
    #[command(alias = "stop")]
    End,
    /// Close the session window (discard, end or save)
    #[command(alias = "esc")]
    Close,
    /// Mark one of the task's pending steps as finished in the summary
    Select(SelectArgs),
    /// Stage a new pending step in the summary
    Next(TextArgs),
    /// Stage a finished step in the summary
    Done(TextArgs),
    /// Save the summary into the task and close the session
    #[command(alias = "save")]
    Finish,
}

/// A single task id.
#[derive(Args, Debug)]
pub struct TaskArgs {
    #[arg(help = "Id of the task, for example task-1")]
    pub task: String,
}

impl From<TaskArgs> for TaskRef {
    fn from(val: TaskArgs) -> Self {
        TaskRef { task_id: val.task }
    }
}

/// Move a task to another column
#[derive(Args, Debug)]
pub struct MoveArgs {
    pub task: String,
    #[arg(value_enum, help = "Target column")]
    pub column: ColumnArg,
}

impl From<MoveArgs> for MoveTask {
    fn from(val: MoveArgs) -> Self {
        MoveTask {
            task_id: val.task,
            column: val.column.to_string(),
        }
    }
}

/// Change a task's impact rating
#[derive(Args, Debug)]
pub struct ImpactArgs {
    pub task: String,
    #[arg(help = "Number of stars, 1 to 3")]
    pub stars: u8,
}

impl From<ImpactArgs> for UpdateTask {
    fn from(val: ImpactArgs) -> Self {
        UpdateTask {
            task_id: val.task,
            title: None,
            impact_stars: Some(val.stars),
        }
    }
}

/// Change a task's title
#[derive(Args, Debug)]
pub struct RenameArgs {
    pub task: String,
    #[arg(required = true, num_args = 1.., help = "New title")]
    pub title: Vec<String>,
}

impl From<RenameArgs> for UpdateTask {
    fn from(val: RenameArgs) -> Self {
        UpdateTask {
            task_id: val.task,
            title: Some(val.title.join(" ")),
            impact_stars: None,
        }
    }
}

/// Check or uncheck a pending step
#[derive(Args, Debug)]
pub struct ToggleArgs {
    pub task: String,
    #[arg(help = "Id of the step, for example step-1a")]
    pub step: String,
}

impl From<ToggleArgs> for ToggleStep {
    fn from(val: ToggleArgs) -> Self {
        ToggleStep {
            task_id: val.task,
            step_id: val.step,
        }
    }
}

/// Append a pending step to a task
#[derive(Args, Debug)]
pub struct AddArgs {
    pub task: String,
    #[arg(required = true, num_args = 1.., help = "Step text")]
    pub text: Vec<String>,
}

impl From<AddArgs> for AddStep {
    fn from(val: AddArgs) -> Self {
        AddStep {
            task_id: val.task,
            text: val.text.join(" "),
        }
    }
}

/// Change the remaining time
#[derive(Args, Debug)]
pub struct AdjustArgs {
    #[arg(allow_negative_numbers = true, help = "Minutes: -5, -1, +1 or +5")]
    pub minutes: i64,
}

impl From<AdjustArgs> for AdjustDuration {
    fn from(val: AdjustArgs) -> Self {
        AdjustDuration {
            minutes: val.minutes,
        }
    }
}

/// Select a pending step in the summary
#[derive(Args, Debug)]
pub struct SelectArgs {
    pub step: String,
}

impl SelectArgs {
    pub fn step_id(&self) -> StepId {
        StepId::from(self.step.as_str())
    }
}

/// Free text for a summary entry
#[derive(Args, Debug)]
pub struct TextArgs {
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TextArgs {
    pub fn into_entry(self, kind: EntryKind) -> ManualEntry {
        ManualEntry {
            kind,
            text: self.text.join(" "),
        }
    }
}

/// Command-line representation of the board columns
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    /// To Do
    #[value(alias = "to-do")]
    Todo,
    /// In Progress
    #[value(alias = "inprogress", alias = "doing")]
    InProgress,
    /// Done
    Done,
}

impl fmt::Display for ColumnArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnArg::Todo => write!(f, "todo"),
            ColumnArg::InProgress => write!(f, "inprogress"),
            ColumnArg::Done => write!(f, "done"),
        }
    }
}

impl From<ColumnArg> for Column {
    fn from(val: ColumnArg) -> Self {
        match val {
            ColumnArg::Todo => Column::Todo,
            ColumnArg::InProgress => Column::InProgress,
            ColumnArg::Done => Column::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        ShellLine::try_parse_from(line.split_whitespace())
            .unwrap_or_else(|e| panic!("failed to parse {line:?}: {e}"))
            .command
    }

    #[test]
    fn test_move_accepts_column_aliases() {
        let ShellCommand::Board(BoardCommand::Move(args)) = parse("move task-1 doing") else {
            panic!("expected move");
        };
        let params = MoveTask::from(args);
        assert_eq!(params.task_id, "task-1");
        assert_eq!(params.validate().unwrap().1, Column::InProgress);
    }

    #[test]
    fn test_multi_word_text_is_joined() {
        let ShellCommand::Board(BoardCommand::Add(args)) = parse("add task-2 Write   the conclusion")
        else {
            panic!("expected add");
        };
        assert_eq!(AddStep::from(args).text, "Write the conclusion");

        let ShellCommand::Session(SessionCommand::Done(args)) = parse("done Fixed the tests") else {
            panic!("expected done");
        };
        let entry = args.into_entry(EntryKind::Completed);
        assert_eq!(entry.text, "Fixed the tests");
        assert_eq!(entry.kind, EntryKind::Completed);
    }

    #[test]
    fn test_adjust_takes_signed_minutes() {
        for (line, minutes) in [("adjust -5", -5), ("adjust +1", 1), ("adjust 5", 5)] {
            let ShellCommand::Session(SessionCommand::Adjust(args)) = parse(line) else {
                panic!("expected adjust");
            };
            assert_eq!(args.minutes, minutes);
        }
    }

    #[test]
    fn test_aliases() {
        assert!(matches!(parse("exit"), ShellCommand::Quit));
        assert!(matches!(
            parse("esc"),
            ShellCommand::Session(SessionCommand::Close)
        ));
        assert!(matches!(
            parse("ls"),
            ShellCommand::Board(BoardCommand::Board)
        ));
    }

    #[test]
    fn test_rejects_incomplete_lines() {
        assert!(ShellLine::try_parse_from(["rename", "task-1"]).is_err());
        assert!(ShellLine::try_parse_from(["move", "task-1", "archive"]).is_err());
        assert!(ShellLine::try_parse_from(["dance"]).is_err());
    }
}
