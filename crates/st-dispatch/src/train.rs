//! Per-train route state and the train arena.

use st_core::{SimTime, StationId, TrainClass, TrainId};

use crate::{DispatchError, DispatchResult};

/// One raw itinerary record.  A train that waits at a station logs one entry
/// per attempt; `st_sim::merge_log` folds them back into a single visit.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LogEntry {
    pub station:   StationId,
    pub arrival:   SimTime,
    pub departure: SimTime,
}

/// Route, position and log of a single train.
///
/// `position` indexes `route`.  `position == route.len()` is the terminal
/// state: the train has been processed at its last station and takes no
/// further part in dispatching.
#[derive(Clone, Debug)]
pub struct Train {
    pub id:       TrainId,
    /// Public service number; event-time tie-break.
    pub number:   u32,
    pub class:    TrainClass,
    pub route:    Vec<StationId>,
    pub position: usize,
    /// Arrival time at the current station (the train's scheduled time).
    pub time:     SimTime,
    /// Append-only; entries are amended in place but never removed.
    pub log:      Vec<LogEntry>,
}

impl Train {
    pub fn new(
        id:     TrainId,
        number: u32,
        class:  TrainClass,
        route:  Vec<StationId>,
        start:  SimTime,
    ) -> Self {
        Self { id, number, class, route, position: 0, time: start, log: Vec::new() }
    }

    #[inline]
    pub fn is_express(&self) -> bool {
        self.class.is_express()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.position >= self.route.len()
    }

    /// The station the train is at, or `None` once terminal.
    #[inline]
    pub fn current_station(&self) -> Option<StationId> {
        self.route.get(self.position).copied()
    }

    /// The next station on the route, or `None` at the last station or once
    /// terminal.
    #[inline]
    pub fn next_station(&self) -> Option<StationId> {
        self.route.get(self.position + 1).copied()
    }

    /// `true` when the current station is the last one on the route.
    #[inline]
    pub fn at_last_station(&self) -> bool {
        self.position + 1 == self.route.len()
    }

    /// Step to the next station and return it.
    pub fn advance(&mut self) -> DispatchResult<StationId> {
        let next = self.next_station().ok_or(DispatchError::Terminal(self.id))?;
        self.position += 1;
        Ok(next)
    }

    /// Enter the terminal state.  Idempotent.
    pub fn finish(&mut self) {
        self.position = self.route.len();
    }

    pub fn log_visit(&mut self, station: StationId, arrival: SimTime, departure: SimTime) {
        self.log.push(LogEntry { station, arrival, departure });
    }

    /// Overwrite the departure of the most recent log entry.
    pub fn amend_departure(&mut self, departure: SimTime) {
        if let Some(last) = self.log.last_mut() {
            last.departure = departure;
        }
    }
}

// ── TrainStore ────────────────────────────────────────────────────────────────

/// Index-addressed arena of trains, in roster order.
#[derive(Clone, Debug, Default)]
pub struct TrainStore {
    pub trains: Vec<Train>,
}

impl TrainStore {
    pub fn new(trains: Vec<Train>) -> Self {
        Self { trains }
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// # Panics
    /// Panics if `id` was not issued for this store.
    #[inline]
    pub fn get(&self, id: TrainId) -> &Train {
        &self.trains[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: TrainId) -> &mut Train {
        &mut self.trains[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Train> + '_ {
        self.trains.iter()
    }
}
