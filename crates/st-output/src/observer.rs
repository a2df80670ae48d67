//! `DispatchOutputObserver<W>` bridges `DispatchObserver` to an `OutputWriter`.

use st_core::{SimTime, StationId, TrainClass};
use st_dispatch::{Decision, Train, TrainStore};
use st_line::Line;
use st_sim::{itinerary, DispatchObserver, RunOutcome};

use crate::row::{ItineraryRow, RunSummaryRow, SegmentUseRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A committed hop, kept by id until the line is available to name it.
struct Commit {
    train_no:  u32,
    class:     TrainClass,
    from:      StationId,
    to:        StationId,
    departure: SimTime,
    arrival:   SimTime,
}

/// A [`DispatchObserver`] that writes the itinerary, the segment usage log
/// and a run summary to any [`OutputWriter`] backend.
///
/// Commits are buffered during the run; everything is written when the loop
/// stops.  Writer errors are stored because observer hooks return nothing;
/// check them with [`take_error`][Self::take_error] after `sim.run()`.
pub struct DispatchOutputObserver<W: OutputWriter> {
    writer:     W,
    commits:    Vec<Commit>,
    waits:      u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> DispatchOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, commits: Vec::new(), waits: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write_all(&mut self, outcome: &RunOutcome, line: &Line, trains: &TrainStore) -> OutputResult<()> {
        let rows: Vec<ItineraryRow> = itinerary(line, trains).into_iter().map(ItineraryRow::from).collect();
        self.writer.write_itinerary(&rows)?;

        let name = |id: StationId| line.station(id).name.clone();
        let uses: Vec<SegmentUseRow> = self
            .commits
            .drain(..)
            .map(|c| SegmentUseRow {
                train_no:  c.train_no,
                class:     c.class,
                from:      name(c.from),
                to:        name(c.to),
                departure: c.departure,
                arrival:   c.arrival,
            })
            .collect();
        self.writer.write_segment_uses(&uses)?;

        let pending = match *outcome {
            RunOutcome::Completed { .. } => 0,
            RunOutcome::Truncated { pending, .. } => pending as u64,
        };
        self.writer.write_summary(&RunSummaryRow {
            processed: outcome.processed(),
            pending,
            completed: outcome.is_complete(),
            waits:     self.waits,
        })
    }
}

impl<W: OutputWriter> DispatchObserver for DispatchOutputObserver<W> {
    fn on_decision(&mut self, _train: &Train, _proposed: SimTime, decision: Decision) {
        if !decision.is_go() {
            self.waits += 1;
        }
    }

    fn on_commit(&mut self, train: &Train, from: StationId, to: StationId, departure: SimTime, arrival: SimTime) {
        self.commits.push(Commit {
            train_no: train.number,
            class: train.class,
            from,
            to,
            departure,
            arrival,
        });
    }

    fn on_run_end(&mut self, outcome: &RunOutcome, line: &Line, trains: &TrainStore) {
        let result = self.write_all(outcome, line, trains);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
