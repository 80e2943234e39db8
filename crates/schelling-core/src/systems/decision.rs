//! Agent Decisions
//!
//! One activation of one agent. Influencers only check whether their
//! surroundings are tolerable. Ordinary agents check similarity, then fall
//! back on whatever influence is present around them:
//!
//! ```text
//! similar >= homophily            -> satisfied, stay
//! positive influencer adjacent    -> stay
//! negative influencer adjacent    -> two radius-2 hops
//! otherwise                       -> jump to a random empty cell
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use schelling_events::Influence;

use crate::components::{Agent, AgentId, AgentKind, Grid, Position};
use crate::error::GridError;

/// Neighborhood radius used for similarity and influence checks
pub const MOORE_RADIUS: usize = 1;

/// Radius of each hop in a negative-influence double move
pub const DOUBLE_MOVE_RADIUS: usize = 2;

/// Number of hops in a double move
pub const DOUBLE_MOVE_HOPS: usize = 2;

/// Model-wide values an activation needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionContext {
    pub homophily: u32,
    pub majority_type: u8,
}

/// What an agent did when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ordinary agent with enough similar neighbors
    Satisfied,
    /// Influencer content with its surroundings
    Stayed,
    /// Unsatisfied ordinary agent held in place by a positive influencer
    Suppressed,
    /// Negative-influence hops. `hops` counts the hops that landed and
    /// `displaced` is false when the agent ended on its starting cell.
    DoubleMoved { hops: u8, displaced: bool },
    /// Jumped to a random empty cell
    Relocated(Position),
    /// Wanted to relocate but the grid is full
    Blocked,
}

impl Outcome {
    pub fn is_satisfied(self) -> bool {
        matches!(self, Outcome::Satisfied)
    }

    pub fn moved(self) -> bool {
        match self {
            Outcome::Relocated(_) => true,
            Outcome::DoubleMoved { displaced, .. } => displaced,
            Outcome::Satisfied | Outcome::Stayed | Outcome::Suppressed | Outcome::Blocked => false,
        }
    }
}

/// Activate a single agent against the current grid.
///
/// Moves made by agents activated earlier in the same tick are visible here.
pub fn step_agent<R: Rng + ?Sized>(
    id: AgentId,
    grid: &mut Grid,
    agents: &mut [Agent],
    ctx: &DecisionContext,
    rng: &mut R,
) -> Outcome {
    let outcome = match agents[id.index()].kind() {
        AgentKind::Influencer { tolerance, .. } => {
            step_influencer(id, tolerance, grid, agents, ctx, rng)
        }
        AgentKind::Ordinary => step_ordinary(id, grid, agents, ctx, rng),
    };
    tracing::trace!(agent = %id, ?outcome, "agent activated");
    outcome
}

fn step_influencer<R: Rng + ?Sized>(
    id: AgentId,
    tolerance: u32,
    grid: &mut Grid,
    agents: &mut [Agent],
    ctx: &DecisionContext,
    rng: &mut R,
) -> Outcome {
    let me = &agents[id.index()];
    let mut similar = 0u32;
    let mut majority = 0u32;
    for neighbor in grid.neighbors(me.position(), MOORE_RADIUS) {
        let neighbor_type = agents[neighbor.index()].agent_type();
        // A neighbor can count in both tallies
        if neighbor_type == me.agent_type() {
            similar += 1;
        }
        if neighbor_type == ctx.majority_type {
            majority += 1;
        }
    }

    if similar + majority < tolerance {
        relocate_anywhere(grid, &mut agents[id.index()], rng)
    } else {
        Outcome::Stayed
    }
}

fn step_ordinary<R: Rng + ?Sized>(
    id: AgentId,
    grid: &mut Grid,
    agents: &mut [Agent],
    ctx: &DecisionContext,
    rng: &mut R,
) -> Outcome {
    let me = &agents[id.index()];
    let mut similar = 0u32;
    let mut positive = false;
    let mut negative = false;
    for neighbor in grid.neighbors(me.position(), MOORE_RADIUS) {
        let neighbor = &agents[neighbor.index()];
        match neighbor.kind() {
            AgentKind::Ordinary => {
                if neighbor.agent_type() == me.agent_type() {
                    similar += 1;
                }
            }
            AgentKind::Influencer {
                influence: Influence::Positive,
                ..
            } => positive = true,
            AgentKind::Influencer {
                influence: Influence::Negative,
                ..
            } => negative = true,
        }
    }

    let me = &mut agents[id.index()];
    if similar >= ctx.homophily {
        Outcome::Satisfied
    } else if positive {
        Outcome::Suppressed
    } else if negative {
        double_move(grid, me, rng)
    } else {
        relocate_anywhere(grid, me, rng)
    }
}

/// Two hops, each to a random cell within radius 2 of wherever the agent
/// stands at that moment. A hop onto an occupied cell is dropped.
fn double_move<R: Rng + ?Sized>(grid: &mut Grid, agent: &mut Agent, rng: &mut R) -> Outcome {
    let start = agent.position();
    let mut hops = 0u8;
    for _ in 0..DOUBLE_MOVE_HOPS {
        let candidates = grid.neighborhood(agent.position(), DOUBLE_MOVE_RADIUS);
        let Some(&target) = candidates.choose(rng) else {
            continue;
        };
        if grid.relocate(agent, target).is_ok() {
            hops += 1;
        }
    }
    Outcome::DoubleMoved {
        hops,
        displaced: agent.position() != start,
    }
}

fn relocate_anywhere<R: Rng + ?Sized>(grid: &mut Grid, agent: &mut Agent, rng: &mut R) -> Outcome {
    match grid.relocate_to_random_empty(agent, rng) {
        Ok(target) => Outcome::Relocated(target),
        Err(GridError::NoEmptyCell) => Outcome::Blocked,
        Err(err) => {
            tracing::warn!(agent = %agent.id(), %err, "relocation failed");
            Outcome::Blocked
        }
    }
}
