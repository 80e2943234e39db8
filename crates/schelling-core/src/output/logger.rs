//! Tick Log
//!
//! `happy.jsonl`: one JSON line per completed tick, written as the run
//! progresses so a crashed run still leaves the series up to that point.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use schelling_events::TickRecord;

/// File name of the tick log inside the output directory
pub const TICK_LOG_FILE: &str = "happy.jsonl";

pub struct TickLogger {
    path: PathBuf,
    writer: BufWriter<File>,
    last_tick: Option<u64>,
}

impl TickLogger {
    /// Truncate or create `<dir>/happy.jsonl`, creating `dir` if needed
    pub fn in_dir(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(TICK_LOG_FILE);
        let writer = BufWriter::new(File::create(&path)?);
        Ok(Self {
            path,
            writer,
            last_tick: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tick of the most recent line written
    pub fn last_tick(&self) -> Option<u64> {
        self.last_tick
    }

    pub fn log(&mut self, record: &TickRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.last_tick = Some(record.tick);
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for TickLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!(
                path = %self.path.display(),
                last_tick = ?self.last_tick,
                "tick log not flushed: {}",
                e
            );
        }
    }
}
