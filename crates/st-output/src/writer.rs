//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ItineraryRow, OutputResult, RunSummaryRow, SegmentUseRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer calls these once each, at the end of the run.  Errors are
/// stored there and retrieved with
/// [`DispatchOutputObserver::take_error`][crate::DispatchOutputObserver::take_error].
pub trait OutputWriter {
    /// Write merged visits, trains in roster order.
    fn write_itinerary(&mut self, rows: &[ItineraryRow]) -> OutputResult<()>;

    /// Write committed segment traversals in commit order.
    fn write_segment_uses(&mut self, rows: &[SegmentUseRow]) -> OutputResult<()>;

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
