//! Simulation Systems
//!
//! Per-agent decision rules and the scheduler that activates every agent
//! once per tick.

pub mod decision;
pub mod schedule;

pub use decision::{step_agent, DecisionContext, Outcome};
pub use schedule::{RandomActivation, TickTally};
