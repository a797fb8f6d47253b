//! Background thread that runs a rebuild pass on a fixed interval.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::info;

use crate::store::SqliteStore;
use crate::sync::rebuild::{PassReport, SyncOptions, run_pass};

/// Time between passes when nothing else is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(20);

/// What the synchronizer thread is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Waiting for the next tick.
    Idle,
    /// Running a pass.
    Rebuilding,
}

#[derive(Debug, Default)]
struct SyncStatus {
    rebuilding: AtomicBool,
    ticks: AtomicUsize,
}

/// Configures and starts the synchronizer thread.
///
/// The first pass runs immediately. Passes never overlap: the wait for the
/// next tick only starts once the previous pass has committed or rolled back.
#[derive(Debug, Clone)]
pub struct SyncScheduler {
    interval: Duration,
    options: SyncOptions,
    max_ticks: Option<usize>,
}

impl Default for SyncScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl SyncScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            options: SyncOptions::default(),
            max_ticks: None,
        }
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Stops on its own after `ticks` passes.
    pub fn with_max_ticks(mut self, ticks: usize) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Moves `store` onto a new thread and starts ticking.
    ///
    /// `on_pass` is called on that thread after every pass with the tick
    /// number (starting at 1) and the pass report.
    pub fn spawn<F>(self, store: SqliteStore, mut on_pass: F) -> std::io::Result<SyncHandle>
    where
        F: FnMut(usize, &PassReport) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let status = Arc::new(SyncStatus::default());
        let thread_status = Arc::clone(&status);

        let thread = thread::Builder::new()
            .name("category-sync".to_string())
            .spawn(move || {
                let mut store = store;
                let mut tick = 0;
                info!(interval_ms = self.interval.as_millis() as u64, "category sync started");

                loop {
                    thread_status.rebuilding.store(true, Ordering::SeqCst);
                    let report = run_pass(&mut store, &self.options);
                    thread_status.rebuilding.store(false, Ordering::SeqCst);

                    tick += 1;
                    thread_status.ticks.store(tick, Ordering::SeqCst);
                    on_pass(tick, &report);

                    if self.max_ticks.is_some_and(|max| tick >= max) {
                        break;
                    }
                    match stop_rx.recv_timeout(self.interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }

                info!(ticks = tick, "category sync stopped");
                store
            })?;

        Ok(SyncHandle {
            stop_tx,
            status,
            thread,
        })
    }
}

/// Handle to a running synchronizer thread.
///
/// Dropping the handle also stops the thread at its next wait.
pub struct SyncHandle {
    stop_tx: Sender<()>,
    status: Arc<SyncStatus>,
    thread: JoinHandle<SqliteStore>,
}

impl SyncHandle {
    pub fn state(&self) -> SyncState {
        if self.status.rebuilding.load(Ordering::SeqCst) {
            SyncState::Rebuilding
        } else {
            SyncState::Idle
        }
    }

    /// Number of completed passes.
    pub fn ticks(&self) -> usize {
        self.status.ticks.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wakes the thread, lets any running pass finish, and returns the store.
    ///
    /// Returns `None` if the thread panicked.
    pub fn stop(self) -> Option<SqliteStore> {
        let _ = self.stop_tx.send(());
        self.thread.join().ok()
    }

    /// Blocks until the thread ends on its own, then returns the store.
    ///
    /// Only returns when a tick limit was set or the thread panicked.
    pub fn wait(self) -> Option<SqliteStore> {
        let Self {
            stop_tx, thread, ..
        } = self;
        let store = thread.join().ok();
        drop(stop_tx);
        store
    }
}
