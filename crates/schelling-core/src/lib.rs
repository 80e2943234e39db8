//! Schelling Segregation Engine with Social Influencers
//!
//! Agents on a bounded grid relocate according to the make-up of their Moore
//! neighborhood. A handful of influencer agents bias how their unsatisfied
//! neighbors move. Every random draw comes from one seeded source so a run is
//! reproducible from its parameters and seed.

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod params;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use components::*;

pub use config::{ConfigError, RunConfig, SimConfig};
pub use error::{GridError, ParamError, SimError};
pub use params::SchellingParams;
pub use simulation::Simulation;
pub use systems::{Outcome, TickTally};

pub use schelling_events::{GridSnapshot, Influence, TickRecord};

/// Seeded random number generator used for every draw in a run
pub type SimRng = rand::rngs::SmallRng;
