//! Builder for creating and configuring FocusBoard instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::{BoardHooks, FocusBoard, NoopHooks};
use crate::{
    error::{BoardError, Result},
    models::Task,
    session::{DEFAULT_FOCUS_SECONDS, MIN_FOCUS_SECONDS},
    store::{seed, TaskStore},
};

/// Builder for creating and configuring FocusBoard instances.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    seed_file: Option<PathBuf>,
    focus_seconds: u32,
    use_config_seed: bool,
}

impl BoardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            seed_file: None,
            focus_seconds: DEFAULT_FOCUS_SECONDS,
            use_config_seed: true,
        }
    }

    /// Sets a JSON file to take the starting tasks from.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/focusboard/seed.json` when it
    /// exists and the built-in tasks otherwise.
    pub fn with_seed_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.seed_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Skips the XDG config lookup and always falls back to the built-in
    /// tasks.
    pub fn without_config_seed(mut self) -> Self {
        self.use_config_seed = false;
        self
    }

    /// Sets the initial length of focus sessions, in whole minutes.
    pub fn with_focus_minutes(mut self, minutes: u32) -> Self {
        self.focus_seconds = minutes.saturating_mul(60);
        self
    }

    /// Builds a board without presentation hooks.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::FileSystem` if the seed file cannot be read
    /// Returns `BoardError::Serialization` or `BoardError::InvalidInput` if it
    /// does not hold a valid board
    /// Returns `BoardError::InvalidInput` if the focus length is under a
    /// minute
    pub async fn build(self) -> Result<FocusBoard<NoopHooks>> {
        self.build_with_hooks(NoopHooks).await
    }

    /// Builds a board that reports presentation effects to `hooks`.
    pub async fn build_with_hooks<H: BoardHooks>(self, hooks: H) -> Result<FocusBoard<H>> {
        if self.focus_seconds < MIN_FOCUS_SECONDS {
            return Err(BoardError::invalid_input("focus_minutes")
                .with_reason("focus sessions last at least one minute"));
        }

        let focus_seconds = self.focus_seconds;
        let tasks = self.load_tasks().await?;

        let mut board = FocusBoard::with_hooks(TaskStore::new(tasks), hooks);
        board.set_focus_seconds(focus_seconds);
        Ok(board)
    }

    async fn load_tasks(self) -> Result<Vec<Task>> {
        let seed_file = match self.seed_file {
            Some(path) => Some(path),
            None if self.use_config_seed => Self::config_seed_path(),
            None => None,
        };

        let Some(path) = seed_file else {
            info!("using built-in seed tasks");
            return Ok(seed::default_tasks());
        };

        task::spawn_blocking(move || seed::load_seed_file(&path))
            .await
            .map_err(|e| BoardError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }

    /// Returns the seed file under the XDG config directory, if one exists.
    fn config_seed_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("focusboard").find_config_file("seed.json")
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
