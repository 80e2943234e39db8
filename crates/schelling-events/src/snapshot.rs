//! Snapshot Types
//!
//! Serialization structs for grid snapshots.
//!
//! A snapshot captures the full occupancy of the grid after a tick, which is
//! everything a renderer or analysis script needs from the simulation.

use serde::{Deserialize, Serialize};

use crate::Influence;

/// Generates a snapshot ID for the given tick.
pub fn generate_snapshot_id(tick: u64) -> String {
    format!("snap_{:06}", tick)
}

/// One occupied cell of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub agent_id: u32,
    pub agent_type: u8,
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub is_influencer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influence: Option<Influence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<u32>,
}

impl AgentSnapshot {
    /// Snapshot of an ordinary agent
    pub fn ordinary(agent_id: u32, agent_type: u8, row: usize, col: usize) -> Self {
        Self {
            agent_id,
            agent_type,
            row,
            col,
            is_influencer: false,
            influence: None,
            tolerance: None,
        }
    }

    /// Snapshot of an influencer agent
    pub fn influencer(
        agent_id: u32,
        agent_type: u8,
        row: usize,
        col: usize,
        influence: Influence,
        tolerance: u32,
    ) -> Self {
        Self {
            agent_id,
            agent_type,
            row,
            col,
            is_influencer: true,
            influence: Some(influence),
            tolerance: Some(tolerance),
        }
    }
}

/// Complete grid state at the end of a tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub snapshot_id: String,
    pub tick: u64,
    pub width: usize,
    pub height: usize,
    pub happy: u32,
    /// Occupied cells in row-major order
    #[serde(default)]
    pub agents: Vec<AgentSnapshot>,
}

impl GridSnapshot {
    pub fn new(tick: u64, width: usize, height: usize, happy: u32) -> Self {
        Self {
            snapshot_id: generate_snapshot_id(tick),
            tick,
            width,
            height,
            happy,
            agents: Vec::new(),
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.agents.len()
    }

    /// Find the agent occupying a cell
    pub fn agent_at(&self, row: usize, col: usize) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.row == row && a.col == col)
    }

    /// Find an agent by ID
    pub fn find_agent(&self, agent_id: u32) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.agent_id == agent_id)
    }

    pub fn influencer_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_influencer).count()
    }
}
