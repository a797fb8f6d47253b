//! Category graph synchronizer.
//!
//! Re-derives both edge tables from every stored body on each tick. Nothing
//! is carried between ticks, so any drift between bodies and edges is gone
//! after the next pass. Each tick reads every body.

mod rebuild;
mod scheduler;


pub use rebuild::{KindReport, PassReport, SyncOptions, rebuild_kind, run_pass};
pub use scheduler::{DEFAULT_INTERVAL, SyncHandle, SyncScheduler, SyncState};
