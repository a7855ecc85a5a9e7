//! CSV output backend for per-tick statistics.
//!
//! Creates one file in the configured output directory: `tick_stats.csv`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use wsn_sim::TickStats;

use crate::OutputResult;

/// Writes one [`TickStats`] row per tick to `tick_stats.csv`.
pub struct StatsCsvWriter {
    stats:    Writer<File>,
    finished: bool,
}

impl StatsCsvWriter {
    /// Open (or create) the CSV file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut stats = Writer::from_path(dir.join("tick_stats.csv"))?;
        stats.write_record([
            "tick",
            "active",
            "sleeping",
            "dead",
            "failed",
            "avg_active_battery",
            "packets_in_flight",
            "sink_packets",
            "packets_lost",
        ])?;
        Ok(Self {
            stats,
            finished: false,
        })
    }

    pub fn write_row(&mut self, row: &TickStats) -> OutputResult<()> {
        self.stats.write_record(&[
            row.tick.0.to_string(),
            row.active.to_string(),
            row.sleeping.to_string(),
            row.dead.to_string(),
            row.failed.to_string(),
            format!("{:.3}", row.avg_active_battery),
            row.packets_in_flight.to_string(),
            row.sink_packets.to_string(),
            row.packets_lost.to_string(),
        ])?;
        Ok(())
    }

    /// Flush buffered rows to disk.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stats.flush()?;
        Ok(())
    }
}
