//! Roster entries.

use st_core::{SimTime, TrainClass};

/// One train in the roster, as supplied by the dataset.
///
/// The route is the contiguous run of line stations from `route_start` to
/// `route_end` (line indices, inclusive).  `route_start > route_end` means
/// the train runs against the line's order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainSpec {
    /// Public service number.  Unique within a roster; breaks event-time ties.
    pub number:      u32,
    pub class:       TrainClass,
    pub route_start: usize,
    pub route_end:   usize,
    /// Time of the train's first event at its origin station.
    pub start_time:  SimTime,
}

impl TrainSpec {
    pub fn new(
        number:      u32,
        class:       TrainClass,
        route_start: usize,
        route_end:   usize,
        start_time:  SimTime,
    ) -> Self {
        Self { number, class, route_start, route_end, start_time }
    }

    /// `true` when the train runs from a higher line index to a lower one.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.route_start > self.route_end
    }
}
