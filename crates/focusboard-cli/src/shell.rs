//! Interactive shell driving the board.
//!
//! The shell owns the [`FocusBoard`] and runs a single event loop that
//! selects over three sources: lines from stdin, ticks from the session
//! timer, and Ctrl-C. Every mutation happens on this loop.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use focusboard_core::{
    params::{AddStep, AdjustDuration, ManualEntry, MoveTask, TaskRef, ToggleStep, UpdateTask},
    BoardError, BoardView, CloseOutcome, Column, ColumnView, DropTarget, EntryKind, FocusBoard,
    FocusSession, OperationStatus, SessionPhase, SessionView, SummaryView, Task, TaskId,
    TimerTick,
};
use log::{debug, info};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    signal,
};

use crate::{
    cli::{BoardCommand, SessionCommand, ShellCommand, ShellLine},
    hooks::TerminalHooks,
    renderer::TerminalRenderer,
};

const BANNER: &str = "Focusboard shell. Type `help` for commands, `quit` to leave.\n";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Board plus renderer, handling one-shot output and the interactive shell.
pub struct Shell {
    board: FocusBoard<TerminalHooks>,
    renderer: TerminalRenderer,
}

impl Shell {
    pub fn new(board: FocusBoard<TerminalHooks>, renderer: TerminalRenderer) -> Self {
        Self { board, renderer }
    }

    /// Prints the board, or a single column of it.
    pub fn show_board(&self, column: Option<Column>) -> Result<()> {
        let tasks = self.board.store().tasks();
        match column {
            Some(column) => self.renderer.render(&ColumnView::new(column, tasks).to_string()),
            None => self.renderer.render(&BoardView(tasks).to_string()),
        }
    }

    /// Runs the interactive loop until `quit`, end of input, or Ctrl-C with
    /// no session open.
    pub async fn run(mut self) -> Result<()> {
        let mut ticks = self
            .board
            .take_tick_receiver()
            .context("Timer channel already in use")?;
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let interactive = io::stdin().is_terminal();

        self.renderer.render(BANNER)?;
        loop {
            if interactive {
                print!("> ");
                io::stdout().flush().context("Failed to flush stdout")?;
            }

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read from stdin")? else {
                        debug!("stdin closed");
                        break;
                    };
                    if self.execute_line(&line)? == Flow::Quit {
                        break;
                    }
                }
                Some(tick) = ticks.recv() => {
                    self.on_tick(tick)?;
                }
                result = signal::ctrl_c() => {
                    result.context("Failed to listen for Ctrl-C")?;
                    if self.board.session().is_none() {
                        break;
                    }
                    println!();
                    self.close()?;
                }
            }
            self.flush_notices()?;
        }

        info!("Focusboard shell finished");
        Ok(())
    }

    fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let words = split_line(line);
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                print!("{e}");
                return Ok(Flow::Continue);
            }
            Err(e) => {
                let message = e.to_string();
                let first = message.lines().next().unwrap_or_default();
                self.fail(first.trim_start_matches("error: "))?;
                return Ok(Flow::Continue);
            }
        };

        debug!("shell command: {command:?}");
        match command {
            ShellCommand::Board(command) => self.board_command(command)?,
            ShellCommand::Session(command) => self.session_command(command)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn board_command(&mut self, command: BoardCommand) -> Result<()> {
        match command {
            BoardCommand::Board => self.show_board(None),
            BoardCommand::Show(args) => {
                let task_id = TaskRef::from(args).id();
                match self.board.store().require_task(&task_id) {
                    Ok(task) => self.renderer.render(&task.to_string()),
                    Err(e) => self.fail(e),
                }
            }
            BoardCommand::Move(args) => {
                let (task_id, column) = match MoveTask::from(args).validate() {
                    Ok(validated) => validated,
                    Err(e) => return self.fail(e),
                };
                let task = match self.existing_task(&task_id) {
                    Ok(task) => task,
                    Err(e) => return self.fail(e),
                };
                if task.column == column {
                    return self.fail(format!("{} is already in {column}", task.title));
                }
                self.board.drop_task(&task_id, &DropTarget::Column(column));
                self.succeed(format!("Moved {} to {column}", task.title))
            }
            BoardCommand::Impact(args) => self.update_task(args.into()),
            BoardCommand::Rename(args) => self.update_task(args.into()),
            BoardCommand::Toggle(args) => {
                let (task_id, step_id) = ToggleStep::from(args).ids();
                let task = match self.existing_task(&task_id) {
                    Ok(task) => task,
                    Err(e) => return self.fail(e),
                };
                let Some(step) = task.next_steps.iter().find(|step| step.id == step_id) else {
                    return self.fail(BoardError::step_not_found(step_id.as_str()));
                };
                let checked = !step.completed;
                self.board.toggle_step(&task_id, &step_id);
                let mark = if checked { "Checked" } else { "Unchecked" };
                self.succeed(format!("{mark} {}", step.text))
            }
            BoardCommand::Add(args) => {
                let (task_id, text) = match AddStep::from(args).validate() {
                    Ok(validated) => validated,
                    Err(e) => return self.fail(e),
                };
                let task = match self.existing_task(&task_id) {
                    Ok(task) => task,
                    Err(e) => return self.fail(e),
                };
                if !task.accepts_new_steps() {
                    return self.fail(format!("{} is done and takes no new steps", task.title));
                }
                self.board.add_step(&task_id, &text);
                self.succeed(format!("Added step to {}", task.title))
            }
            BoardCommand::Focus(args) => {
                let task_id = TaskRef::from(args).id();
                if let Err(e) = self.existing_task(&task_id) {
                    return self.fail(e);
                }
                if !self.board.start_focus(&task_id) {
                    return self.fail("A focus session is already open; `close` it first");
                }
                self.render_session()
            }
        }
    }

    fn session_command(&mut self, command: SessionCommand) -> Result<()> {
        if self.board.session().is_none() {
            return self.fail("No focus session is open; use `focus <task>` first");
        }

        match command {
            SessionCommand::Start => {
                if !self.board.start_session() {
                    return self.fail("The session has already been started");
                }
                self.render_session()
            }
            SessionCommand::Pause => {
                if !self.board.toggle_session() {
                    return self.fail("The session has ended");
                }
                self.render_session()
            }
            SessionCommand::Adjust(args) => {
                let step = match AdjustDuration::from(args).validate() {
                    Ok(step) => step,
                    Err(e) => return self.fail(e),
                };
                if !self.board.adjust_session(step) {
                    if self.is_ended() {
                        return self.fail("The session has ended");
                    }
                    return self.fail("The remaining time cannot go below one minute");
                }
                self.render_session()
            }
            SessionCommand::Status => self.render_session(),
            SessionCommand::End => {
                if !self.board.end_session() {
                    return self.fail("The session has already ended");
                }
                self.render_session()
            }
            SessionCommand::Close => self.close(),
            SessionCommand::Select(args) => {
                if !self.is_ended() {
                    return self.fail("Steps can be selected once the session has ended");
                }
                if !self.board.select_session_step(&args.step_id()) {
                    return self.fail(format!("{} is not a pending step of this task", args.step));
                }
                self.render_session()
            }
            SessionCommand::Next(args) => self.stage(args.into_entry(EntryKind::Next)),
            SessionCommand::Done(args) => self.stage(args.into_entry(EntryKind::Completed)),
            SessionCommand::Finish => {
                if !self.is_ended() {
                    return self.fail("End the session before saving it");
                }
                self.finish()
            }
        }
    }

    fn update_task(&mut self, params: UpdateTask) -> Result<()> {
        let patch = match params.validate() {
            Ok(patch) => patch,
            Err(e) => return self.fail(e),
        };
        let task_id = params.id();
        if let Err(e) = self.existing_task(&task_id) {
            return self.fail(e);
        }
        self.board.update_task(&task_id, &patch);
        match self.board.store().task(&task_id) {
            Some(task) => self.renderer.render(&task.to_string()),
            None => Ok(()),
        }
    }

    fn stage(&mut self, entry: ManualEntry) -> Result<()> {
        if !self.is_ended() {
            return self.fail("Entries can be added once the session has ended");
        }
        if !self.board.add_session_entry(entry.kind, &entry.text) {
            return self.fail("Entry text cannot be empty");
        }
        self.render_session()
    }

    /// Escape key equivalent: discard, end or save depending on the phase.
    fn close(&mut self) -> Result<()> {
        let task_id = self.board.session().map(|session| session.task_id().clone());
        match (self.board.close_session(), task_id) {
            (CloseOutcome::Discarded, _) => self.succeed("Focus session discarded"),
            (CloseOutcome::SummaryShown, _) => self.render_session(),
            (CloseOutcome::Finished, Some(task_id)) => {
                self.succeed("Focus session saved")?;
                self.render_task(&task_id)
            }
            _ => self.fail("No focus session is open"),
        }
    }

    fn finish(&mut self) -> Result<()> {
        let Some(task_id) = self.board.session().map(|session| session.task_id().clone()) else {
            return self.fail("No focus session is open");
        };
        self.board.finish_session();
        self.succeed("Focus session saved")?;
        self.render_task(&task_id)
    }

    fn on_tick(&mut self, tick: TimerTick) -> Result<()> {
        if !self.board.handle_tick(tick) {
            return Ok(());
        }
        println!();
        self.render_session()
    }

    /// Countdown screen while the session runs, summary once it has ended.
    fn render_session(&self) -> Result<()> {
        let Some(session) = self.board.session() else {
            return Ok(());
        };
        let Some(task) = self.board.session_task() else {
            return Ok(());
        };
        if matches!(session.phase(), SessionPhase::Ended { .. }) {
            self.renderer.render(&SummaryView { session, task }.to_string())
        } else {
            self.renderer.render(&SessionView { session, task }.to_string())
        }
    }

    fn render_task(&self, task_id: &TaskId) -> Result<()> {
        match self.board.store().task(task_id) {
            Some(task) => self.renderer.render(&task.to_string()),
            None => Ok(()),
        }
    }

    fn flush_notices(&mut self) -> Result<()> {
        for notice in self.board.hooks_mut().drain() {
            self.renderer.render(&format!("{notice}\n"))?;
        }
        Ok(())
    }

    fn is_ended(&self) -> bool {
        self.board.session().is_some_and(FocusSession::is_ended)
    }

    /// Looks a task up, cloning it so the board can be mutated afterwards.
    fn existing_task(&self, task_id: &TaskId) -> focusboard_core::Result<Task> {
        self.board.store().require_task(task_id).cloned()
    }

    fn succeed(&self, message: impl Into<String>) -> Result<()> {
        self.renderer.status(&OperationStatus::success(message))
    }

    fn fail(&self, message: impl ToString) -> Result<()> {
        self.renderer
            .status(&OperationStatus::failure(message.to_string()))
    }
}

/// Splits a shell line into words for clap.
///
/// Commands that end in free text (`rename`, `add`, `next`, `done`) keep that
/// text verbatim as one word, with one pair of surrounding quotes removed.
/// Everything else is split on whitespace.
fn split_line(line: &str) -> Vec<&str> {
    let line = line.trim();
    let Some(command) = line.split_whitespace().next() else {
        return Vec::new();
    };
    let ids = match command {
        "rename" | "add" => 1,
        "next" | "done" => 0,
        _ => return line.split_whitespace().collect(),
    };

    let mut words = vec![command];
    let mut rest = line[command.len()..].trim_start();
    for _ in 0..ids {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if end == 0 {
            break;
        }
        words.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    if !rest.is_empty() {
        words.push(unquote(rest));
    }
    words
}

fn unquote(text: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| text.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(text)
}
