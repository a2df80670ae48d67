//! `st-output` — itinerary writers for the single-track simulator.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                            |
//! |-----------|---------|----------------------------------------------------------|
//! | *(none)*  | CSV     | `itinerary.csv`, `segment_uses.csv`, `run_summary.csv`   |
//! | `sqlite`  | SQLite  | `itinerary.db`                                           |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`DispatchOutputObserver`], which implements `st_sim::DispatchObserver`.
//! Times are written as `HH:MM`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use st_output::{CsvWriter, DispatchOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = DispatchOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DispatchOutputObserver;
pub use row::{ItineraryRow, RunSummaryRow, SegmentUseRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
