//! Shared snapshot and report types for the Schelling simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the engine and for anything that renders or
//! records its output.

pub mod influence;
pub mod portrayal;
pub mod snapshot;
pub mod tick;

pub use influence::Influence;

pub use portrayal::{portray, render_ascii, Portrayal, Shape};

pub use snapshot::{generate_snapshot_id, AgentSnapshot, GridSnapshot};

pub use tick::{RunSummary, TickRecord};
