//! Output
//!
//! Snapshots, the happy-count series and the files they are written to.

pub mod logger;
pub mod snapshot;
pub mod stats;

pub use logger::TickLogger;
pub use snapshot::{generate_snapshot, write_snapshot_to_dir, SnapshotSchedule};
pub use stats::{write_stats, HappyCollector, StatsReport};
