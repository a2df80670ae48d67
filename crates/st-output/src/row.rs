//! Plain data row types written by output backends.

use st_core::{SimTime, TrainClass};
use st_sim::ItineraryRecord;

/// One merged station visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRow {
    pub train_no:  u32,
    pub class:     TrainClass,
    pub station:   String,
    pub arrival:   SimTime,
    pub departure: SimTime,
    /// Minutes spent at the station, retries included.
    pub dwell:     u32,
}

impl From<ItineraryRecord> for ItineraryRow {
    fn from(r: ItineraryRecord) -> Self {
        Self {
            dwell:     r.departure.since(r.arrival),
            train_no:  r.train_no,
            class:     r.class,
            station:   r.station,
            arrival:   r.arrival,
            departure: r.departure,
        }
    }
}

/// One committed traversal of a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentUseRow {
    pub train_no:  u32,
    pub class:     TrainClass,
    pub from:      String,
    pub to:        String,
    pub departure: SimTime,
    pub arrival:   SimTime,
}

/// How the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummaryRow {
    pub processed: u64,
    /// Events left in the queue; non-zero only for a truncated run.
    pub pending:   u64,
    pub completed: bool,
    /// Wait decisions issued across all trains.
    pub waits:     u64,
}
