//! Segment keys.

use std::fmt;

use st_core::StationId;

/// The physical track between two adjacent stations.
///
/// Unordered: `Segment::new(a, b) == Segment::new(b, a)`.  The lower station
/// index is always stored first so the value can key an occupancy map
/// regardless of travel direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    lo: StationId,
    hi: StationId,
}

impl Segment {
    #[inline]
    pub fn new(a: StationId, b: StationId) -> Self {
        if a <= b { Self { lo: a, hi: b } } else { Self { lo: b, hi: a } }
    }

    /// End nearer the line's start.
    #[inline]
    pub fn lo(self) -> StationId {
        self.lo
    }

    /// End nearer the line's end.
    #[inline]
    pub fn hi(self) -> StationId {
        self.hi
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.lo.0, self.hi.0)
    }
}
