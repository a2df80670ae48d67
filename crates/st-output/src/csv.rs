//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `itinerary.csv`
//! - `segment_uses.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ItineraryRow, OutputResult, RunSummaryRow, SegmentUseRow};

/// Writes itinerary output to three CSV files.
pub struct CsvWriter {
    itinerary: Writer<File>,
    segments:  Writer<File>,
    summary:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut itinerary = Writer::from_path(dir.join("itinerary.csv"))?;
        itinerary.write_record(["train_no", "class", "station", "arrival", "departure", "dwell"])?;

        let mut segments = Writer::from_path(dir.join("segment_uses.csv"))?;
        segments.write_record(["train_no", "class", "from", "to", "departure", "arrival"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(["processed", "pending", "completed", "waits"])?;

        Ok(Self { itinerary, segments, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_itinerary(&mut self, rows: &[ItineraryRow]) -> OutputResult<()> {
        for row in rows {
            self.itinerary.write_record(&[
                row.train_no.to_string(),
                row.class.to_string(),
                row.station.clone(),
                row.arrival.to_string(),
                row.departure.to_string(),
                row.dwell.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_segment_uses(&mut self, rows: &[SegmentUseRow]) -> OutputResult<()> {
        for row in rows {
            self.segments.write_record(&[
                row.train_no.to_string(),
                row.class.to_string(),
                row.from.clone(),
                row.to.clone(),
                row.departure.to_string(),
                row.arrival.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.processed.to_string(),
            row.pending.to_string(),
            (row.completed as u8).to_string(),
            row.waits.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.itinerary.flush()?;
        self.segments.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
