//! Agent Components
//!
//! Identity, group type, position and influencer role of a single agent.

use serde::{Deserialize, Serialize};
use std::fmt;

use schelling_events::Influence;

use super::grid::Position;

/// Unique identifier for an agent, also its index in the population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl AgentId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent_{}", self.0)
    }
}

/// Role of an agent in the population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentKind {
    /// Seeks neighbors of its own type
    Ordinary,
    /// Ignores its own satisfaction; moves only when fewer than `tolerance`
    /// neighbors share its type or the majority type
    Influencer { influence: Influence, tolerance: u32 },
}

impl AgentKind {
    pub fn positive(tolerance: u32) -> Self {
        AgentKind::Influencer {
            influence: Influence::Positive,
            tolerance,
        }
    }

    pub fn negative(tolerance: u32) -> Self {
        AgentKind::Influencer {
            influence: Influence::Negative,
            tolerance,
        }
    }
}

/// Immutable record an agent is created from.
///
/// Kept on every agent so a pristine copy can be rebuilt at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentParams {
    pub id: AgentId,
    pub agent_type: u8,
    pub position: Position,
    pub kind: AgentKind,
}

/// Agent description without an ID, used to lay out a population by hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub agent_type: u8,
    pub position: Position,
    pub kind: AgentKind,
}

impl AgentSpec {
    pub fn ordinary(agent_type: u8, position: Position) -> Self {
        Self {
            agent_type,
            position,
            kind: AgentKind::Ordinary,
        }
    }

    pub fn positive(agent_type: u8, position: Position, tolerance: u32) -> Self {
        Self {
            agent_type,
            position,
            kind: AgentKind::positive(tolerance),
        }
    }

    pub fn negative(agent_type: u8, position: Position, tolerance: u32) -> Self {
        Self {
            agent_type,
            position,
            kind: AgentKind::negative(tolerance),
        }
    }

    /// Attach an ID, producing the record the agent is built from
    pub fn with_id(self, id: AgentId) -> AgentParams {
        AgentParams {
            id,
            agent_type: self.agent_type,
            position: self.position,
            kind: self.kind,
        }
    }
}

/// A single agent on the grid.
///
/// Everything except the position is fixed at creation. The position only
/// changes through [`Grid`](super::Grid) relocation so the grid and the
/// agent never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    id: AgentId,
    agent_type: u8,
    position: Position,
    kind: AgentKind,
    spawn: AgentParams,
}

impl Agent {
    pub fn from_params(params: AgentParams) -> Self {
        Self {
            id: params.id,
            agent_type: params.agent_type,
            position: params.position,
            kind: params.kind,
            spawn: params,
        }
    }

    /// Build a fresh agent from the record this one was created from
    pub fn respawn(&self) -> Self {
        Self::from_params(self.spawn)
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn agent_type(&self) -> u8 {
        self.agent_type
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn spawn_params(&self) -> &AgentParams {
        &self.spawn
    }

    pub fn is_influencer(&self) -> bool {
        matches!(self.kind, AgentKind::Influencer { .. })
    }

    /// Influence polarity, `None` for ordinary agents
    pub fn influence(&self) -> Option<Influence> {
        match self.kind {
            AgentKind::Ordinary => None,
            AgentKind::Influencer { influence, .. } => Some(influence),
        }
    }

    /// Relocation threshold, `None` for ordinary agents
    pub fn tolerance(&self) -> Option<u32> {
        match self.kind {
            AgentKind::Ordinary => None,
            AgentKind::Influencer { tolerance, .. } => Some(tolerance),
        }
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
