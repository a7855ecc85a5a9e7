//! Fluent builder for constructing an [`Engine`].

use wsn_core::{ModelParams, SimConfig, SimRng, Tick};
use wsn_routing::RoutingTable;
use wsn_world::{place_world, NodeArena, PoiArena};

use crate::stats::TickStats;
use crate::{Engine, SimError, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Required inputs
///
/// - [`SimConfig`] — node count, POI count, sensing range, seed, tick
///   duration.
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                       |
/// |---------------|-----------------------------------------------|
/// | `.params(p)`  | `ModelParams::default()`                      |
/// | `.world(n,p)` | Random placement from the configured seed     |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::new(40, 8, 120).with_seed(7);
/// let mut engine = EngineBuilder::new(config).build()?;
/// engine.run(10_000, &mut NoopObserver);
/// ```
pub struct EngineBuilder {
    config: SimConfig,
    params: ModelParams,
    world:  Option<(NodeArena, PoiArena)>,
}

impl EngineBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            params: ModelParams::default(),
            world:  None,
        }
    }

    /// Override the default model constants.
    pub fn params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    /// Supply a pre-built world instead of random placement.  Arena sizes
    /// must match the configured counts, and exactly one node must be
    /// central.
    pub fn world(mut self, nodes: NodeArena, pois: PoiArena) -> Self {
        self.world = Some((nodes, pois));
        self
    }

    /// Validate inputs, place the world if none was supplied, and return a
    /// ready-to-run [`Engine`].
    pub fn build(self) -> SimResult<Engine> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);

        let (nodes, pois) = match self.world {
            Some((nodes, pois)) => {
                if nodes.len() != self.config.node_count as usize {
                    return Err(SimError::WorldCountMismatch {
                        expected: self.config.node_count as usize,
                        got:      nodes.len(),
                        what:     "node",
                    });
                }
                if pois.len() != self.config.poi_count as usize {
                    return Err(SimError::WorldCountMismatch {
                        expected: self.config.poi_count as usize,
                        got:      pois.len(),
                        what:     "poi",
                    });
                }
                (nodes, pois)
            }
            None => place_world(&self.config, &self.params, &mut rng),
        };

        let centrals = nodes.iter().filter(|(_, n)| n.is_central).count();
        if centrals > 1 {
            return Err(SimError::ExtraCentral(centrals));
        }
        let central = nodes.central().ok_or(SimError::MissingCentral)?;

        let route_slots = nodes.len();
        Ok(Engine {
            clock: self.config.make_clock(),
            config: self.config,
            params: self.params,
            nodes,
            pois,
            routes: RoutingTable::empty(route_slots),
            rng,
            central,
            last_generation: Tick::ZERO,
            lost_total: 0,
            stats: TickStats::default(),
            stopped: None,
        })
    }
}
