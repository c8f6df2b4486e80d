//! One-second countdown driver.
//!
//! A [`SessionTimer`] is a scoped handle on a background tokio task that sends
//! a [`TimerTick`] every second. Dropping the handle aborts the task, so the
//! owner acquires a timer when a session starts running and simply drops it
//! on every way out of `Running`. Each timer carries a generation number;
//! ticks already queued by an older timer are recognised and ignored.

use std::time::Duration;

use log::debug;
use tokio::{
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{self, Instant},
};

/// Interval between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed second, stamped with the generation of the timer that sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub generation: u64,
}

/// Handle on a running countdown task. Aborts the task when dropped.
#[derive(Debug)]
pub struct SessionTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl SessionTimer {
    /// Spawns the ticking task on the current tokio runtime.
    ///
    /// The first tick arrives one full period after spawning.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(generation: u64, ticks: UnboundedSender<TimerTick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                interval.tick().await;
                if ticks.send(TimerTick { generation }).is_err() {
                    debug!("timer {generation}: receiver gone, stopping");
                    break;
                }
            }
        });
        debug!("timer {generation} started");
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once the background task has stopped.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("timer {} cancelled", self.generation);
    }
}
