//! Random Activation Scheduler
//!
//! Every tick, each agent is activated exactly once in a freshly drawn
//! random order. Agents see the moves of everyone activated before them.

use rand::seq::SliceRandom;
use rand::Rng;

use super::decision::{step_agent, DecisionContext, Outcome};
use crate::components::{Agent, AgentId, Grid};

/// Counts gathered while running one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickTally {
    /// Ordinary agents satisfied this tick
    pub happy: u32,
    /// Agents whose cell changed this tick
    pub moved: u32,
    /// Agents that wanted to relocate but found no empty cell
    pub blocked: u32,
}

/// Activation order buffer, reused across ticks
#[derive(Debug, Clone, Default)]
pub struct RandomActivation {
    order: Vec<AgentId>,
}

impl RandomActivation {
    pub fn new(population: usize) -> Self {
        Self {
            order: Vec::with_capacity(population),
        }
    }

    /// Draw a uniformly random permutation of `0..population`.
    ///
    /// The buffer is reset to id order before shuffling so each tick's
    /// permutation does not depend on the previous one.
    pub fn draw_order<R: Rng + ?Sized>(&mut self, population: usize, rng: &mut R) -> &[AgentId] {
        self.order.clear();
        self.order.extend((0..population as u32).map(AgentId));
        self.order.shuffle(rng);
        &self.order
    }

    /// Activate every agent once
    pub fn run_tick<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        agents: &mut [Agent],
        ctx: &DecisionContext,
        rng: &mut R,
    ) -> TickTally {
        self.draw_order(agents.len(), rng);

        let mut tally = TickTally::default();
        for &id in &self.order {
            let outcome = step_agent(id, grid, agents, ctx, rng);
            if outcome.is_satisfied() {
                tally.happy += 1;
            }
            if outcome.moved() {
                tally.moved += 1;
            }
            if outcome == Outcome::Blocked {
                tally.blocked += 1;
            }
        }
        tally
    }
}
