//! Points of interest: fixed data sources with an exclusive observation claim.

use wsn_core::{NodeId, Point2, PoiId};

use crate::Measurement;

/// A fixed-location data source.
///
/// Created once during placement and never destroyed.  The observer claim is
/// exclusive: at most one node observes a POI at a time, and the claim is a
/// weak `NodeId` relation, not ownership.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poi {
    /// Position, immutable after placement.
    pub position: Point2,
    /// Reliability score drawn once at creation, fixed in [0.8, 1.0].
    pub reliability: f32,
    /// The node currently observing this POI, if any.
    pub observer: Option<NodeId>,
    /// Measurements generated but not yet collected by the observer.
    pub buffer: Vec<Measurement>,
}

impl Poi {
    pub fn new(position: Point2, reliability: f32) -> Self {
        Self {
            position,
            reliability,
            observer: None,
            buffer: Vec::new(),
        }
    }

    /// `true` if some node currently claims this POI.
    #[inline]
    pub fn is_observed(&self) -> bool {
        self.observer.is_some()
    }
}

// ── PoiArena ──────────────────────────────────────────────────────────────────

/// Arena of all POIs, indexed by `PoiId`.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoiArena {
    inner: Vec<Poi>,
}

impl PoiArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a POI and return its `PoiId` (sequential from 0).
    pub fn push(&mut self, poi: Poi) -> PoiId {
        let id = PoiId(self.inner.len() as u32);
        self.inner.push(poi);
        id
    }

    #[inline]
    pub fn get(&self, id: PoiId) -> &Poi {
        &self.inner[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: PoiId) -> &mut Poi {
        &mut self.inner[id.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterator over all `PoiId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = PoiId> + 'static {
        (0..self.inner.len() as u32).map(PoiId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PoiId, &Poi)> {
        self.inner
            .iter()
            .enumerate()
            .map(|(i, p)| (PoiId(i as u32), p))
    }
}
