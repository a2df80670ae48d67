//! Simulation observer trait for progress reporting and data collection.

use st_core::{SimTime, StationId};
use st_dispatch::{Decision, Train, TrainStore};
use st_line::Line;

use crate::RunOutcome;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: wait counter
///
/// ```rust,ignore
/// struct WaitCounter(usize);
///
/// impl DispatchObserver for WaitCounter {
///     fn on_decision(&mut self, _t: &Train, _proposed: SimTime, d: Decision) {
///         if !d.is_go() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called for every popped event of a non-terminal train, before any
    /// state changes.
    fn on_event(&mut self, _time: SimTime, _train: &Train) {}

    /// Called after the resolver decided, before the decision is applied.
    fn on_decision(&mut self, _train: &Train, _proposed: SimTime, _decision: Decision) {}

    /// Called after a Go decision was applied: `train` now occupies the
    /// segment `from`–`to` over `[departure, arrival)`.
    fn on_commit(
        &mut self,
        _train:     &Train,
        _from:      StationId,
        _to:        StationId,
        _departure: SimTime,
        _arrival:   SimTime,
    ) {}

    /// Called when a train is processed at the last station of its route.
    fn on_terminal(&mut self, _train: &Train, _arrival: SimTime) {}

    /// Called once when the loop stops, with read-only access to the final
    /// state so writers can produce the itinerary without the sim knowing
    /// about any output format.
    fn on_run_end(&mut self, _outcome: &RunOutcome, _line: &Line, _trains: &TrainStore) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
