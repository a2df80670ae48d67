//! The occupancy tracker: who holds each segment and who stands at each
//! station.
//!
//! Both maps are owned by the simulation and only mutated while applying a
//! Go decision, so every resolver query sees a consistent snapshot.

use st_core::{SimTime, StationId, TrainClass, TrainId};
use st_line::Segment;

#[cfg(feature = "fx-hash")]
type SegmentMap = rustc_hash::FxHashMap<Segment, Reservation>;
#[cfg(not(feature = "fx-hash"))]
type SegmentMap = std::collections::HashMap<Segment, Reservation>;

/// The most recent claim on a segment.
///
/// `release` is the holder's predicted arrival at the far end: the earliest
/// moment another train may depart onto the segment.  Never cleared; a stale
/// reservation simply has a `release` in the past.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Reservation {
    pub release: SimTime,
    pub class:   TrainClass,
    pub train:   TrainId,
}

/// A train physically present at a station.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Presence {
    pub train:   TrainId,
    pub arrival: SimTime,
    pub class:   TrainClass,
}

pub struct Occupancy {
    reservations: SegmentMap,
    /// Presence sets indexed by `StationId`, in arrival order.
    presence:     Vec<Vec<Presence>>,
}

impl Occupancy {
    /// Empty tracker for a line of `station_count` stations.
    pub fn new(station_count: usize) -> Self {
        Self {
            reservations: SegmentMap::default(),
            presence:     vec![Vec::new(); station_count],
        }
    }

    // ── Segments ──────────────────────────────────────────────────────────

    /// `Some(release)` when the segment's last reservation is released
    /// strictly after `proposed`, i.e. a train departing at `proposed` would
    /// share the track.  `None` when the segment is free by then.
    pub fn reserved_until(&self, segment: Segment, proposed: SimTime) -> Option<SimTime> {
        self.reservations
            .get(&segment)
            .map(|r| r.release)
            .filter(|&release| release > proposed)
    }

    /// Record `reservation` as the segment's current claim, replacing any
    /// earlier one.
    pub fn reserve(&mut self, segment: Segment, reservation: Reservation) {
        self.reservations.insert(segment, reservation);
    }

    // ── Stations ──────────────────────────────────────────────────────────

    /// Trains currently at `station`, oldest arrival first.
    #[inline]
    pub fn present_at(&self, station: StationId) -> &[Presence] {
        self.presence
            .get(station.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_present(&self, station: StationId, train: TrainId) -> bool {
        self.present_at(station).iter().any(|p| p.train == train)
    }

    /// Register `presence` at `station`.
    pub fn arrive(&mut self, station: StationId, presence: Presence) {
        if let Some(set) = self.presence.get_mut(station.index()) {
            set.push(presence);
        }
    }

    /// Remove `train` from `station`'s presence set.
    pub fn depart(&mut self, station: StationId, train: TrainId) {
        if let Some(set) = self.presence.get_mut(station.index()) {
            set.retain(|p| p.train != train);
        }
    }
}
