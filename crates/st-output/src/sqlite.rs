//! SQLite output backend (feature `sqlite`).
//!
//! Creates `itinerary.db` in the configured output directory with three
//! tables: `itinerary`, `segment_uses` and `run_summary`.  Times are stored
//! both as `HH:MM` text and as minutes since midnight.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ItineraryRow, OutputResult, RunSummaryRow, SegmentUseRow};

/// Writes itinerary output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `itinerary.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("itinerary.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS itinerary (
                 train_no      INTEGER NOT NULL,
                 class         TEXT    NOT NULL,
                 station       TEXT    NOT NULL,
                 arrival       TEXT    NOT NULL,
                 departure     TEXT    NOT NULL,
                 arrival_min   INTEGER NOT NULL,
                 departure_min INTEGER NOT NULL,
                 dwell         INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS segment_uses (
                 train_no      INTEGER NOT NULL,
                 class         TEXT    NOT NULL,
                 from_station  TEXT    NOT NULL,
                 to_station    TEXT    NOT NULL,
                 departure_min INTEGER NOT NULL,
                 arrival_min   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 processed INTEGER NOT NULL,
                 pending   INTEGER NOT NULL,
                 completed INTEGER NOT NULL,
                 waits     INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_itinerary(&mut self, rows: &[ItineraryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO itinerary \
                 (train_no, class, station, arrival, departure, arrival_min, departure_min, dwell) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.train_no,
                    row.class.as_str(),
                    row.station,
                    row.arrival.to_string(),
                    row.departure.to_string(),
                    row.arrival.0,
                    row.departure.0,
                    row.dwell,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_segment_uses(&mut self, rows: &[SegmentUseRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO segment_uses \
                 (train_no, class, from_station, to_station, departure_min, arrival_min) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.train_no,
                    row.class.as_str(),
                    row.from,
                    row.to,
                    row.departure.0,
                    row.arrival.0,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary (processed, pending, completed, waits) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.processed as i64, row.pending as i64, row.completed as i64, row.waits as i64],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
