//! Planar coordinate type and the bounded simulation region.
//!
//! The world is an abstract plane, so plain Euclidean distance is the right
//! metric.  `f32` gives more than enough precision for a region a few hundred
//! units across while keeping the arenas compact.

/// A 2-D coordinate in simulation-plane units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point2) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance — cheaper than [`distance`](Self::distance)
    /// for threshold comparisons.
    #[inline]
    pub fn distance_sq(self, other: Point2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// The point at `dist` units from `self` in direction `angle` (radians).
    #[inline]
    pub fn polar_offset(self, angle: f32, dist: f32) -> Point2 {
        Point2 {
            x: self.x + angle.cos() * dist,
            y: self.y + angle.sin() * dist,
        }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// The bounded square region nodes and POIs are placed in.
///
/// Placement keeps a margin from the edges; the usable interior is
/// `[margin, side - margin]` on both axes.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Side length of the square.
    pub side: f32,
    /// Distance kept from every edge when sampling positions.
    pub margin: f32,
}

impl Region {
    pub fn new(side: f32, margin: f32) -> Self {
        Self { side, margin }
    }

    /// Center of the region — where the central node is placed.
    #[inline]
    pub fn center(&self) -> Point2 {
        Point2::new(self.side * 0.5, self.side * 0.5)
    }

    /// `true` if `p` lies inside the margined interior.
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        let lo = self.margin;
        let hi = self.side - self.margin;
        (lo..=hi).contains(&p.x) && (lo..=hi).contains(&p.y)
    }

    /// Clamp `p` into the margined interior.
    #[inline]
    pub fn clamp(&self, p: Point2) -> Point2 {
        let lo = self.margin;
        let hi = self.side - self.margin;
        Point2::new(p.x.clamp(lo, hi), p.y.clamp(lo, hi))
    }
}
