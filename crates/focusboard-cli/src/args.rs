use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::cli::ColumnArg;

/// Kanban task board with timed focus sessions
///
/// Focusboard keeps a three-column board (To Do, In Progress, Done) in
/// memory. Tasks carry an impact rating and a list of steps; a focus session
/// counts down on one task and folds what you finished back into its steps.
/// Nothing is saved when the program exits.
#[derive(Parser)]
#[command(version, about, name = "fb")]
pub struct Args {
    /// JSON file with the starting tasks. Defaults to
    /// $XDG_CONFIG_HOME/focusboard/seed.json, then to the built-in tasks
    #[arg(long, global = true)]
    pub seed_file: Option<PathBuf>,

    /// Initial length of focus sessions in minutes
    #[arg(long, global = true, default_value_t = 20)]
    pub focus_minutes: u32,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Focusboard CLI
///
/// Without a command the interactive shell starts.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the board and exit
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Start the interactive shell
    Shell,
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Only print this column
    #[arg(short, long, value_enum)]
    pub column: Option<ColumnArg>,
}
