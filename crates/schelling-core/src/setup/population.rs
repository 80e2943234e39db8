//! Population Seeding
//!
//! Scans the grid row by row, fills each cell with probability `density` and
//! hands out influencer roles to the earliest seeded agents.

use rand::Rng;
use std::collections::BTreeMap;

use schelling_events::Influence;

use crate::components::{Agent, AgentId, AgentKind, AgentSpec, Grid, Position};
use crate::error::SimError;
use crate::params::{SchellingParams, MAJORITY_TYPE, MINORITY_TYPE};

/// Remaining influencer roles to hand out during seeding.
///
/// Roles go to agents in seeding order: all positive ones first, then the
/// negative ones, then everyone else is ordinary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfluencerQuota {
    positive_left: u32,
    positive_tolerance: u32,
    negative_left: u32,
    negative_tolerance: u32,
}

impl InfluencerQuota {
    pub fn from_params(params: &SchellingParams) -> Self {
        Self {
            positive_left: params.num_positive,
            positive_tolerance: params.positive_tolerance,
            negative_left: params.num_negative,
            negative_tolerance: params.negative_tolerance,
        }
    }

    /// Role for the next seeded agent
    pub fn next_kind(&mut self) -> AgentKind {
        if self.positive_left > 0 {
            self.positive_left -= 1;
            AgentKind::positive(self.positive_tolerance)
        } else if self.negative_left > 0 {
            self.negative_left -= 1;
            AgentKind::negative(self.negative_tolerance)
        } else {
            AgentKind::Ordinary
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.positive_left == 0 && self.negative_left == 0
    }
}

/// Draw a population layout.
///
/// Consumes one draw per cell for occupancy and one more per seeded agent for
/// its type, in row-major order.
pub fn seed_population<R: Rng + ?Sized>(params: &SchellingParams, rng: &mut R) -> Vec<AgentSpec> {
    let mut quota = InfluencerQuota::from_params(params);
    let mut specs = Vec::new();

    for row in 0..params.height {
        for col in 0..params.width {
            if rng.gen::<f64>() >= params.density {
                continue;
            }
            let agent_type = if rng.gen::<f64>() < params.minority_pc {
                MINORITY_TYPE
            } else {
                MAJORITY_TYPE
            };
            specs.push(AgentSpec {
                agent_type,
                position: Position::new(row, col),
                kind: quota.next_kind(),
            });
        }
    }

    if !quota.is_exhausted() {
        tracing::warn!(
            seeded = specs.len(),
            "fewer agents seeded than influencer roles requested"
        );
    }
    specs
}

/// Turn a layout into agents and the grid holding them.
///
/// IDs follow the order of `specs`.
pub fn build_population(
    width: usize,
    height: usize,
    specs: &[AgentSpec],
) -> Result<(Grid, Vec<Agent>), SimError> {
    let mut grid = Grid::new(width, height);
    let mut agents = Vec::with_capacity(specs.len());

    for (index, spec) in specs.iter().enumerate() {
        let agent = Agent::from_params(spec.with_id(AgentId(index as u32)));
        grid.place(&agent).map_err(|source| SimError::Placement {
            agent: agent.id(),
            source,
        })?;
        agents.push(agent);
    }
    Ok((grid, agents))
}

/// Counts of a population by role and type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationSummary {
    pub total: usize,
    pub ordinary: usize,
    pub positive: usize,
    pub negative: usize,
    pub by_type: BTreeMap<u8, usize>,
}

/// Summarise a population for logging
pub fn summarize_population(agents: &[Agent]) -> PopulationSummary {
    let mut summary = PopulationSummary {
        total: agents.len(),
        ..PopulationSummary::default()
    };
    for agent in agents {
        match agent.influence() {
            None => summary.ordinary += 1,
            Some(Influence::Positive) => summary.positive += 1,
            Some(Influence::Negative) => summary.negative += 1,
        }
        *summary.by_type.entry(agent.agent_type()).or_insert(0) += 1;
    }
    summary
}
