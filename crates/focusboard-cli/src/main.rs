//! Focusboard CLI Application
//!
//! Command-line front end for the focusboard task board: a one-shot `show`
//! and an interactive shell with timed focus sessions.

mod args;
mod cli;
mod hooks;
mod renderer;
mod shell;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use focusboard_core::BoardBuilder;
use hooks::TerminalHooks;
use log::info;
use renderer::TerminalRenderer;
use shell::Shell;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        seed_file,
        focus_minutes,
        no_color,
        command,
    } = Args::parse();

    let board = BoardBuilder::new()
        .with_seed_file(seed_file)
        .with_focus_minutes(focus_minutes)
        .build_with_hooks(TerminalHooks::default())
        .await
        .context("Failed to initialize board")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Focusboard started");

    match command {
        Some(Commands::Show(args)) => {
            Shell::new(board, renderer).show_board(args.column.map(Into::into))
        }
        Some(Commands::Shell) | None => Shell::new(board, renderer).run().await,
    }
}
