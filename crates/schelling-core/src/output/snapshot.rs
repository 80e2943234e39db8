//! Snapshot Generation
//!
//! Converts the live grid into [`GridSnapshot`]s and writes them to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use schelling_events::{AgentSnapshot, GridSnapshot};

use crate::components::{Agent, AgentKind};
use crate::simulation::Simulation;

/// Subdirectory of the output directory holding snapshot files
pub const SNAPSHOT_DIR: &str = "snapshots";

/// Snapshot of one agent
pub fn agent_snapshot(agent: &Agent) -> AgentSnapshot {
    let pos = agent.position();
    match agent.kind() {
        AgentKind::Ordinary => {
            AgentSnapshot::ordinary(agent.id().0, agent.agent_type(), pos.row, pos.col)
        }
        AgentKind::Influencer {
            influence,
            tolerance,
        } => AgentSnapshot::influencer(
            agent.id().0,
            agent.agent_type(),
            pos.row,
            pos.col,
            influence,
            tolerance,
        ),
    }
}

/// Snapshot of the whole grid, agents in row-major cell order
pub fn generate_snapshot(sim: &Simulation) -> GridSnapshot {
    let grid = sim.grid();
    let mut snapshot = GridSnapshot::new(sim.tick(), grid.width(), grid.height(), sim.happy());
    snapshot.agents = grid
        .occupied()
        .filter_map(|(_, id)| sim.agent(id))
        .map(agent_snapshot)
        .collect();
    snapshot
}

/// Write a snapshot as pretty JSON to `<dir>/snapshots/<snapshot_id>.json`
pub fn write_snapshot_to_dir(snapshot: &GridSnapshot, dir: &Path) -> io::Result<PathBuf> {
    let snapshot_dir = dir.join(SNAPSHOT_DIR);
    fs::create_dir_all(&snapshot_dir)?;

    let path = snapshot_dir.join(format!("{}.json", snapshot.snapshot_id));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Decides which ticks get a periodic snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotSchedule {
    /// Ticks between snapshots; 0 disables periodic snapshots
    interval: u64,
    written: u64,
}

impl SnapshotSchedule {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            written: 0,
        }
    }

    pub fn should_snapshot(&self, tick: u64) -> bool {
        self.interval > 0 && tick > 0 && tick % self.interval == 0
    }

    pub fn mark_written(&mut self) {
        self.written += 1;
    }

    pub fn snapshot_count(&self) -> u64 {
        self.written
    }
}
