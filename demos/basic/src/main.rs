//! basic — reference run of the sensor network simulator.
//!
//! Places 40 nodes and 8 POIs in the default 640×640 region and runs until
//! coverage is lost or the tick budget runs out, writing the sink receipt
//! log and per-tick statistics to `output/basic/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;

use wsn_core::{NodeId, SimConfig, Tick};
use wsn_output::LogObserver;
use wsn_sim::{EngineBuilder, EngineObserver, StopReason, TickStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const NODE_COUNT:    u32 = 40;
const POI_COUNT:     u32 = 8;
const SENSING_RANGE: u32 = 120;
const SEED:          u64 = 42;
const MAX_TICKS:     u64 = 50_000; // 100 ms ticks → 5 000 simulated seconds

const PROGRESS_INTERVAL: u64 = 500;

// ── Observer wrapper for progress reporting ───────────────────────────────────

struct ProgressObserver {
    inner: LogObserver,
}

impl EngineObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        if tick.0 % PROGRESS_INTERVAL == 0 {
            info!(
                "{tick}: {} active / {} sleeping / {} dead / {} failed, \
                 sink {} lost {}",
                stats.active,
                stats.sleeping,
                stats.dead,
                stats.failed,
                stats.sink_packets,
                stats.packets_lost,
            );
        }
        self.inner.on_tick_end(tick, stats);
    }

    fn on_sink_receipt(&mut self, tick: Tick, from: NodeId, packets: &[wsn_world::Measurement]) {
        self.inner.on_sink_receipt(tick, from, packets);
    }

    fn on_stop(&mut self, tick: Tick, reason: StopReason, stats: &TickStats) {
        info!("{tick}: run stopped ({reason})");
        self.inner.on_stop(tick, reason, stats);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== basic — wireless sensor network simulator ===");
    println!("Nodes: {NODE_COUNT}  |  POIs: {POI_COUNT}  |  Range: {SENSING_RANGE}  |  Seed: {SEED}");
    println!();

    // 1. Config and engine.
    let config = SimConfig::new(NODE_COUNT, POI_COUNT, SENSING_RANGE).with_seed(SEED);
    let mut engine = EngineBuilder::new(config).build()?;
    println!(
        "Placed {} nodes and {} POIs, central at ({:.0}, {:.0})",
        engine.nodes.len(),
        engine.pois.len(),
        engine.nodes.get(engine.central()).position.x,
        engine.nodes.get(engine.central()).position.y,
    );

    // 2. Output.
    std::fs::create_dir_all("output/basic")?;
    let mut obs = ProgressObserver {
        inner: LogObserver::new(Path::new("output/basic"))?,
    };

    // 3. Run until the network stops covering its POIs or the budget ends.
    let t0 = Instant::now();
    let final_tick = engine.run(MAX_TICKS, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    match engine.stop_reason() {
        Some(reason) => println!("Stopped at {final_tick}: {reason}"),
        None => println!("Tick budget exhausted at {final_tick}"),
    }
    let stats = engine.stats();
    println!(
        "Final: {} active, {} sleeping, {} dead, {} failed  |  sink {}  lost {}",
        stats.active, stats.sleeping, stats.dead, stats.failed,
        stats.sink_packets, stats.packets_lost,
    );
    println!();

    // 5. Final node table.
    println!("{:<10} {:<9} {:>8} {:>8} {:>6}", "Node", "State", "Battery", "Buffer", "Lost");
    println!("{}", "-".repeat(46));
    for (id, node) in engine.nodes.iter() {
        println!(
            "{:<10} {:<9} {:>8.2} {:>8} {:>6}{}",
            id.0,
            node.state.to_string(),
            node.battery,
            node.buffer.len(),
            node.lost_packets,
            if node.is_central { "  (central)" } else { "" },
        );
    }

    Ok(())
}
