//! The `Sim` struct and its event loop.

use std::fmt;

use st_core::{DispatchConfig, SimTime};
use st_dispatch::{ConflictResolver, Decision, Occupancy, Presence, Reservation, TrainStore};
use st_line::{Line, Segment};
use st_roster::{Event, EventQueue};

use crate::{itinerary, DispatchObserver, ItineraryRecord, SimError, SimResult};

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// How a call to [`Sim::run`] ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    /// The event queue drained: every train reached its terminus.
    Completed { processed: u64 },
    /// The `max_events` bound stopped the loop with events still pending.
    /// The itinerary covers only what happened before the cutoff.
    Truncated { processed: u64, pending: usize },
}

impl RunOutcome {
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, RunOutcome::Completed { .. })
    }

    /// Total events processed by the sim so far.
    pub fn processed(self) -> u64 {
        match self {
            RunOutcome::Completed { processed } | RunOutcome::Truncated { processed, .. } => processed,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed { processed } => {
                write!(f, "completed after {processed} events")
            }
            RunOutcome::Truncated { processed, pending } => {
                write!(f, "truncated after {processed} events with {pending} pending")
            }
        }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Owns the line, the trains, the occupancy tracker and the event queue.
/// Each popped event is handled to completion (including all state updates
/// of a Go decision) before the next one is popped, so every resolver query
/// sees a consistent world.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: DispatchConfig,

    pub line: Line,

    /// Trains in roster order, indexed by `TrainId`.
    pub trains: TrainStore,

    /// Segment reservations and per-station presence sets.
    pub occupancy: Occupancy,

    /// Exactly one pending event per non-terminal train.
    pub queue: EventQueue,

    /// Events processed so far, across all `run`/`run_events` calls.
    pub processed: u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process events until the queue drains or `config.max_events` events
    /// have been processed in total.
    pub fn run<O: DispatchObserver>(&mut self, observer: &mut O) -> SimResult<RunOutcome> {
        while self.processed < self.config.max_events {
            let Some(event) = self.queue.pop() else { break };
            self.processed += 1;
            self.process_event(event, observer)?;
        }

        let outcome = self.outcome();
        match outcome {
            RunOutcome::Completed { .. } => log::info!("dispatch {outcome}"),
            RunOutcome::Truncated { .. } => {
                log::warn!("dispatch {outcome}: event bound {} reached", self.config.max_events);
            }
        }
        observer.on_run_end(&outcome, &self.line, &self.trains);
        Ok(outcome)
    }

    /// Process at most `n` events, ignoring `max_events`.
    ///
    /// Useful for tests and incremental stepping.  Returns the number of
    /// events actually processed.
    pub fn run_events<O: DispatchObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut done = 0;
        while done < n {
            let Some(event) = self.queue.pop() else { break };
            self.processed += 1;
            done += 1;
            self.process_event(event, observer)?;
        }
        Ok(done)
    }

    /// Current outcome: complete once the queue is empty.
    pub fn outcome(&self) -> RunOutcome {
        if self.queue.is_empty() {
            RunOutcome::Completed { processed: self.processed }
        } else {
            RunOutcome::Truncated { processed: self.processed, pending: self.queue.len() }
        }
    }

    /// Time of the earliest pending event, if any.
    pub fn next_event_time(&self) -> Option<SimTime> {
        self.queue.peek().map(|e| e.time)
    }

    /// Merged itinerary of every train, trains in roster order.
    pub fn itinerary(&self) -> Vec<ItineraryRecord> {
        itinerary(&self.line, &self.trains)
    }

    // ── Core event processing ─────────────────────────────────────────────

    fn process_event<O: DispatchObserver>(&mut self, event: Event, observer: &mut O) -> SimResult<()> {
        let id = event.train;
        let train = self.trains.get(id);
        let Some(station) = train.current_station() else {
            log::trace!("{} train {} already terminal; event dropped", event.time, train.number);
            return Ok(());
        };
        observer.on_event(event.time, train);

        let class = train.class;
        let number = train.number;
        let arrival = train.time.max(event.time);
        let proposed = arrival + self.line.dwell(station, class);
        let next = train.next_station();

        self.trains.get_mut(id).log_visit(station, arrival, proposed);

        // ── Terminus: final log entry, no further events ──────────────────
        let Some(next) = next else {
            let train = self.trains.get_mut(id);
            train.finish();
            log::trace!("{arrival} train {number} reached terminus {station}");
            observer.on_terminal(self.trains.get(id), arrival);
            return Ok(());
        };

        // ── Resolve ───────────────────────────────────────────────────────
        let decision = ConflictResolver::new(&self.line, &self.trains, &self.occupancy, &self.config)
            .can_proceed(self.trains.get(id), proposed);
        log::debug!(
            "{arrival} train {number} ({class}) at {} → {}: {decision}",
            self.line.station(station).name,
            self.line.station(next).name,
        );
        observer.on_decision(self.trains.get(id), proposed, decision);

        // ── Apply ─────────────────────────────────────────────────────────
        match decision {
            Decision::Go { departure } => {
                let travel = self
                    .line
                    .travel(station, next, class)
                    .ok_or(SimError::MissingLink { from: station, to: next })?;
                let arrival_next = departure + travel;

                let train = self.trains.get_mut(id);
                train.amend_departure(departure);
                train.advance()?;
                train.time = arrival_next;

                self.occupancy.reserve(Segment::new(station, next), Reservation {
                    release: arrival_next,
                    class,
                    train: id,
                });
                self.occupancy.depart(station, id);
                self.occupancy.arrive(next, Presence { train: id, arrival: arrival_next, class });
                self.queue.push(arrival_next, number, id);

                observer.on_commit(self.trains.get(id), station, next, departure, arrival_next);
            }
            Decision::Wait { until, .. } => {
                self.trains.get_mut(id).amend_departure(until);
                self.queue.push(until, number, id);
            }
        }
        Ok(())
    }
}
