//! Append-only text log of central-sink receipt events.
//!
//! One entry per forwarding event that reaches the sink, plus a final
//! `label: value` statistics dump when the run stops.  Write-once-per-event;
//! nothing is ever read back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wsn_core::{NodeId, Tick};
use wsn_sim::{StopReason, TickStats};
use wsn_world::Measurement;

use crate::OutputResult;

/// Writes the sink receipt log to a plain text file.
pub struct SinkLog {
    out:      BufWriter<File>,
    finished: bool,
}

impl SinkLog {
    /// Create (or truncate) the log file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
            finished: false,
        })
    }

    /// Record one forwarding event that reached the sink.
    pub fn record_receipt(
        &mut self,
        tick: Tick,
        from: NodeId,
        packets: &[Measurement],
    ) -> OutputResult<()> {
        writeln!(
            self.out,
            "tick {tick}: central received {} packets from {from}",
            packets.len()
        )?;
        for m in packets {
            writeln!(
                self.out,
                "  {} generated at {} value {:.3} reliability {:.3} origin ({:.1}, {:.1})",
                m.poi, m.tick, m.value, m.reliability, m.origin.x, m.origin.y
            )?;
        }
        Ok(())
    }

    /// Write the final statistics dump as `label: value` lines.
    pub fn record_final_stats(
        &mut self,
        tick: Tick,
        reason: StopReason,
        stats: &TickStats,
    ) -> OutputResult<()> {
        writeln!(self.out, "run stopped at {tick}: {reason}")?;
        writeln!(self.out, "active nodes: {}", stats.active)?;
        writeln!(self.out, "sleeping nodes: {}", stats.sleeping)?;
        writeln!(self.out, "dead nodes: {}", stats.dead)?;
        writeln!(self.out, "failed nodes: {}", stats.failed)?;
        writeln!(self.out, "avg active battery: {:.2}", stats.avg_active_battery)?;
        writeln!(self.out, "packets in flight: {}", stats.packets_in_flight)?;
        writeln!(self.out, "packets at sink: {}", stats.sink_packets)?;
        writeln!(self.out, "packets lost: {}", stats.packets_lost)?;
        Ok(())
    }

    /// Flush buffered lines to disk.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
