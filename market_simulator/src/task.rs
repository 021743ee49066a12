//! Cancellable periodic task.
//!
//! A `PeriodicTask` runs a closure on a dedicated thread every `interval`. The thread waits
//! on a crossbeam `select!` over two channels: a `tick` timer and a private stop channel.
//!
//! Shutdown:
//! - `stop()` signals the stop channel and joins the thread.
//! - `Drop` calls `stop()`, so the timer is released however the owner goes away.
//! - Dropping the stop sender alone is enough to end the loop: a disconnected stop
//!   channel is treated the same as a stop signal.
//! - `on_tick` receives the stop receiver so any blocking work inside a tick can wait on
//!   it too, and returns `ControlFlow::Break` to end the task from within.

use std::ops::ControlFlow;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, bounded, select, tick};
use log::{error, info};
use market_common::{DashboardError, Result};

/// Handle to a running periodic job. Owns its thread and its stop channel.
pub struct PeriodicTask {
    name: String,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    /// Spawn a thread named `name` that calls `on_tick` every `interval`.
    ///
    /// The first call happens one `interval` after spawning. Ticks that would pile up
    /// behind a slow `on_tick` are skipped rather than queued.
    pub fn spawn<F>(name: &str, interval: Duration, mut on_tick: F) -> Result<Self>
    where
        F: FnMut(&Receiver<()>) -> ControlFlow<()> + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let thread_name = name.to_string();

        let handle = thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                let ticker = tick(interval);
                info!("Task '{}' started, interval {:?}", thread_name, interval);
                loop {
                    select! {
                        recv(stop_rx) -> _ => break,
                        recv(ticker) -> _ => {
                            if on_tick(&stop_rx).is_break() {
                                break;
                            }
                        },
                    }
                }
                info!("Task '{}' stopping...", thread_name);
            })?;

        Ok(PeriodicTask {
            name: name.to_string(),
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Task name, also used as the thread name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True until the task has been stopped and its thread has exited.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the task and wait for its thread. Calling it again is a no-op.
    pub fn stop(&mut self) -> Result<()> {
        if let Some(stop_tx) = self.stop_tx.take() {
            // the signal may be consumed inside a tick; dropping the sender still
            // disconnects the channel for the outer loop
            let _ = stop_tx.try_send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| DashboardError::TaskPanicked(self.name.clone()))?;
        }
        Ok(())
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            error!("Failed to stop task: {}", e);
        }
    }
}
