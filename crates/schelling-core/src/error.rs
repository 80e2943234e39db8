//! Error Types
//!
//! Construction-time failures surface as [`SimError`]. Grid failures during a
//! tick are handled locally by the agent that hit them.

use thiserror::Error;

use crate::components::{AgentId, Position};

/// A model parameter outside its documented range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("majority type must be one of the seeded labels (0 or 1), got {0}")]
    MajorityType(u8),
}

/// A grid operation that could not be carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),

    #[error("position {0} is already occupied")]
    Occupied(Position),

    #[error("no empty cell left on the grid")]
    NoEmptyCell,
}

/// Failure to build a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] ParamError),

    #[error("cannot place agent {agent}: {source}")]
    Placement {
        agent: AgentId,
        #[source]
        source: GridError,
    },
}
