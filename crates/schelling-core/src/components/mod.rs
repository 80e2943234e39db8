//! Simulation Components
//!
//! The grid and the agents that live on it.

pub mod agent;
pub mod grid;

pub use agent::*;
pub use grid::*;
