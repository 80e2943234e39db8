//! Simulation
//!
//! Owns the grid, the population, the random source and the happy counter,
//! and advances them one tick at a time.

use rand::SeedableRng;

use schelling_events::{GridSnapshot, TickRecord};

use crate::components::{Agent, AgentId, AgentSpec, Grid};
use crate::error::SimError;
use crate::output::snapshot::generate_snapshot;
use crate::params::SchellingParams;
use crate::setup::{build_population, seed_population, summarize_population};
use crate::systems::{DecisionContext, RandomActivation, TickTally};
use crate::SimRng;

/// A single simulation instance
#[derive(Debug, Clone)]
pub struct Simulation {
    params: SchellingParams,
    grid: Grid,
    agents: Vec<Agent>,
    scheduler: RandomActivation,
    rng: SimRng,
    happy: u32,
    last_tally: TickTally,
    tick: u64,
}

impl Simulation {
    /// Build a simulation with a randomly seeded population.
    ///
    /// Parameters are validated before any agent is created.
    pub fn new(params: SchellingParams, seed: u64) -> Result<Self, SimError> {
        params.validate()?;
        let mut rng = SimRng::seed_from_u64(seed);
        let specs = seed_population(&params, &mut rng);
        let sim = Self::assemble(params, rng, &specs)?;

        let summary = summarize_population(&sim.agents);
        tracing::info!(
            seed,
            width = sim.params.width,
            height = sim.params.height,
            agents = summary.total,
            ordinary = summary.ordinary,
            positive = summary.positive,
            negative = summary.negative,
            "population seeded"
        );
        Ok(sim)
    }

    /// Build a simulation from an explicit layout. Agent IDs follow the
    /// order of `specs`.
    pub fn from_agents(
        params: SchellingParams,
        seed: u64,
        specs: &[AgentSpec],
    ) -> Result<Self, SimError> {
        params.validate()?;
        Self::assemble(params, SimRng::seed_from_u64(seed), specs)
    }

    fn assemble(
        params: SchellingParams,
        rng: SimRng,
        specs: &[AgentSpec],
    ) -> Result<Self, SimError> {
        let (grid, agents) = build_population(params.width, params.height, specs)?;
        Ok(Self {
            scheduler: RandomActivation::new(agents.len()),
            params,
            grid,
            agents,
            rng,
            happy: 0,
            last_tally: TickTally::default(),
            tick: 0,
        })
    }

    /// Advance one tick: reset the happy counter and activate every agent once
    pub fn step(&mut self) {
        self.happy = 0;
        let ctx = DecisionContext {
            homophily: self.params.homophily,
            majority_type: self.params.majority_type,
        };
        let tally = self
            .scheduler
            .run_tick(&mut self.grid, &mut self.agents, &ctx, &mut self.rng);
        self.happy = tally.happy;
        self.last_tally = tally;
        self.tick += 1;

        tracing::debug!(
            tick = self.tick,
            happy = tally.happy,
            moved = tally.moved,
            blocked = tally.blocked,
            "tick complete"
        );
    }

    /// Rebuild every agent from its spawn record and put it back on its
    /// initial cell. Counters go back to zero; the random source carries on.
    pub fn reset(&mut self) {
        self.agents = self.agents.iter().map(Agent::respawn).collect();
        self.grid.clear();
        for agent in &self.agents {
            // Spawn positions were validated when the simulation was built
            if let Err(err) = self.grid.place(agent) {
                tracing::warn!(agent = %agent.id(), %err, "could not restore agent");
            }
        }
        self.happy = 0;
        self.last_tally = TickTally::default();
        self.tick = 0;
    }

    /// Ordinary agents satisfied during the last tick
    pub fn happy(&self) -> u32 {
        self.happy
    }

    /// Completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn last_tally(&self) -> TickTally {
        self.last_tally
    }

    pub fn params(&self) -> &SchellingParams {
        &self.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Agents that can contribute to the happy count
    pub fn ordinary_count(&self) -> usize {
        self.agents.iter().filter(|a| !a.is_influencer()).count()
    }

    pub fn influencer_count(&self) -> usize {
        self.agents.len() - self.ordinary_count()
    }

    /// Metrics of the last completed tick
    pub fn record(&self) -> TickRecord {
        TickRecord::new(self.tick, self.happy, self.last_tally.moved)
    }

    /// Full occupancy for reporting
    pub fn snapshot(&self) -> GridSnapshot {
        generate_snapshot(self)
    }
}
