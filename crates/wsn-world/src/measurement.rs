//! The data packet generated by POIs and relayed toward the central sink.

use wsn_core::{Point2, PoiId, Tick};

/// One measurement, from generation at a POI through per-hop buffers to the
/// central sink.  Plain data; cloning is cheap and the forwarding path moves
/// rather than copies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Measured value, in abstract sensor units.
    pub value: f32,
    /// Tick at which the POI generated this measurement.
    pub tick: Tick,
    /// The generating POI.
    pub poi: PoiId,
    /// Coordinates of the generating POI.
    pub origin: Point2,
    /// Reliability score of the generating POI, fixed in [0.8, 1.0].
    pub reliability: f32,
}
