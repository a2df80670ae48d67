//! Itinerary post-processing.
//!
//! A train that waits at a station logs one entry per attempt, each starting
//! where the previous one's departure left off:
//!
//! ```text
//! B 10:00→10:01   B 10:01→10:15   B 10:15→10:15   ⇒   B 10:00→10:15
//! ```
//!
//! [`merge_log`] folds such runs back into one visit.

use std::fmt;

use st_core::{SimTime, TrainClass};
use st_dispatch::{LogEntry, TrainStore};
use st_line::Line;

/// One merged station visit, as handed to renderers and writers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItineraryRecord {
    pub train_no:  u32,
    pub class:     TrainClass,
    pub station:   String,
    pub arrival:   SimTime,
    pub departure: SimTime,
}

impl fmt::Display for ItineraryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} arr {} dep {}",
            self.train_no, self.station, self.arrival, self.departure
        )
    }
}

/// Coalesce consecutive entries at the same station where each entry's
/// arrival equals the running departure.
///
/// Idempotent: merging an already-merged log returns it unchanged.
pub fn merge_log(log: &[LogEntry]) -> Vec<LogEntry> {
    let mut merged: Vec<LogEntry> = Vec::with_capacity(log.len());
    for entry in log {
        match merged.last_mut() {
            Some(visit) if visit.station == entry.station && visit.departure == entry.arrival => {
                visit.departure = entry.departure;
            }
            _ => merged.push(*entry),
        }
    }
    merged
}

/// Merged visits of every train in `trains`, trains in roster order and
/// visits in chronological order.
pub fn itinerary(line: &Line, trains: &TrainStore) -> Vec<ItineraryRecord> {
    trains
        .iter()
        .flat_map(|train| {
            merge_log(&train.log).into_iter().map(move |visit| ItineraryRecord {
                train_no:  train.number,
                class:     train.class,
                station:   line.station(visit.station).name.clone(),
                arrival:   visit.arrival,
                departure: visit.departure,
            })
        })
        .collect()
}
