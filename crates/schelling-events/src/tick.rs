//! Tick Records
//!
//! One row of the per-tick metric series and the summary derived from it.

use serde::{Deserialize, Serialize};

/// Aggregate metrics sampled once after a tick completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    /// Ordinary agents satisfied during the tick
    pub happy: u32,
    /// Agents whose cell changed during the tick
    #[serde(default)]
    pub moved: u32,
}

impl TickRecord {
    pub fn new(tick: u64, happy: u32, moved: u32) -> Self {
        Self { tick, happy, moved }
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub ordinary_agents: usize,
    pub first_happy: u32,
    pub final_happy: u32,
    pub peak_happy: u32,
    pub mean_happy: f64,
    pub total_moves: u64,
}

impl RunSummary {
    /// Summarise a series of tick records
    pub fn from_records(records: &[TickRecord], ordinary_agents: usize) -> Self {
        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Self {
                    ordinary_agents,
                    ..Self::default()
                }
            }
        };

        let happy_sum: u64 = records.iter().map(|r| r.happy as u64).sum();

        Self {
            ticks: records.len() as u64,
            ordinary_agents,
            first_happy: first.happy,
            final_happy: last.happy,
            peak_happy: records.iter().map(|r| r.happy).max().unwrap_or(0),
            mean_happy: happy_sum as f64 / records.len() as f64,
            total_moves: records.iter().map(|r| r.moved as u64).sum(),
        }
    }

    /// Fraction of ordinary agents satisfied on the final tick
    pub fn final_happy_ratio(&self) -> f64 {
        if self.ordinary_agents == 0 {
            0.0
        } else {
            self.final_happy as f64 / self.ordinary_agents as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_series() {
        let summary = RunSummary::from_records(&[], 12);

        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.ordinary_agents, 12);
        assert_eq!(summary.mean_happy, 0.0);
        assert_eq!(summary.final_happy_ratio(), 0.0);
    }

    #[test]
    fn test_summary_of_series() {
        let records = vec![
            TickRecord::new(1, 10, 30),
            TickRecord::new(2, 40, 12),
            TickRecord::new(3, 30, 5),
        ];

        let summary = RunSummary::from_records(&records, 50);

        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.first_happy, 10);
        assert_eq!(summary.final_happy, 30);
        assert_eq!(summary.peak_happy, 40);
        assert!((summary.mean_happy - 80.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.total_moves, 47);
        assert!((summary.final_happy_ratio() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_tick_record_moved_defaults() {
        let record: TickRecord = serde_json::from_str(r#"{"tick": 4, "happy": 9}"#).unwrap();

        assert_eq!(record, TickRecord::new(4, 9, 0));
    }
}
