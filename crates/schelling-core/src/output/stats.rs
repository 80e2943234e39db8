//! Statistics Output
//!
//! Collects the happy count once per tick and writes the series with its
//! summary for analysis.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use schelling_events::{RunSummary, TickRecord};

use crate::simulation::Simulation;

/// File name of the statistics report inside the output directory
pub const STATS_FILE: &str = "stats.json";

/// Per-tick happy series for one run
#[derive(Debug, Clone, Default)]
pub struct HappyCollector {
    records: Vec<TickRecord>,
    ordinary_agents: usize,
}

/// Serialized statistics report
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub summary: RunSummary,
    pub series: Vec<TickRecord>,
}

impl HappyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the simulation after a tick completes
    pub fn collect(&mut self, sim: &Simulation) -> TickRecord {
        self.ordinary_agents = sim.ordinary_count();
        let record = sim.record();
        self.records.push(record);
        record
    }

    pub fn series(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&TickRecord> {
        self.records.last()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::from_records(&self.records, self.ordinary_agents)
    }

    pub fn report(&self) -> StatsReport {
        StatsReport {
            summary: self.summary(),
            series: self.records.clone(),
        }
    }
}

/// Write the statistics report to `<dir>/stats.json`
pub fn write_stats(report: &StatsReport, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(report)?;
    fs::write(dir.join(STATS_FILE), json)
}
