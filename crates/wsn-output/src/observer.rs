//! `LogObserver` — bridges `EngineObserver` to the output writers.

use std::path::Path;

use wsn_core::{NodeId, Tick};
use wsn_sim::{EngineObserver, StopReason, TickStats};
use wsn_world::Measurement;

use crate::csv::StatsCsvWriter;
use crate::sink_log::SinkLog;
use crate::OutputError;

/// An [`EngineObserver`] that writes the sink receipt log and per-tick
/// statistics CSV into one output directory.
///
/// Write failures must not interrupt the tick loop (fail-soft), and
/// `EngineObserver` methods have no return value, so errors are stored
/// internally and logging simply stops contributing.  After the run, check
/// for errors with [`take_error`][Self::take_error].
pub struct LogObserver {
    sink_log:   SinkLog,
    stats_csv:  StatsCsvWriter,
    last_error: Option<OutputError>,
}

impl LogObserver {
    /// Create `sink_log.txt` and `tick_stats.csv` in `dir`.
    pub fn new(dir: &Path) -> Result<Self, OutputError> {
        Ok(Self {
            sink_log:   SinkLog::new(&dir.join("sink_log.txt"))?,
            stats_csv:  StatsCsvWriter::new(dir)?,
            last_error: None,
        })
    }

    /// Take the stored write error (if any) after the run finishes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl EngineObserver for LogObserver {
    fn on_tick_end(&mut self, _tick: Tick, stats: &TickStats) {
        let result = self.stats_csv.write_row(stats);
        self.store_err(result);
    }

    fn on_sink_receipt(&mut self, tick: Tick, from: NodeId, packets: &[Measurement]) {
        let result = self.sink_log.record_receipt(tick, from, packets);
        self.store_err(result);
    }

    fn on_stop(&mut self, tick: Tick, reason: StopReason, stats: &TickStats) {
        let result = self.sink_log.record_final_stats(tick, reason, stats);
        self.store_err(result);
        let result = self.sink_log.finish();
        self.store_err(result);
        let result = self.stats_csv.finish();
        self.store_err(result);
    }
}
