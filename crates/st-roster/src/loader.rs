//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per train.  Route indices are positions on the line (0-based).
//!
//! ```csv
//! train_no,class,route_start,route_end,start_time
//! 61353,normal,0,31,05:05
//! 62352,express,0,31,08:51
//! 82166,express,31,0,05:25
//! ```
//!
//! **`class`** is `express` or `normal` (case-insensitive).  It is an
//! explicit column; nothing is inferred from the train number.
//!
//! Range checks against the line happen later, in `st_sim::SimBuilder`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use st_core::{SimTime, TrainClass};

use crate::{RosterError, RosterResult, TrainSpec};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    train_no:    u32,
    class:       String,
    route_start: usize,
    route_end:   usize,
    start_time:  String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a roster from a CSV file, in file order.
pub fn load_roster_csv(path: &Path) -> RosterResult<Vec<TrainSpec>> {
    let file = std::fs::File::open(path)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a roster in a
/// binary.
pub fn load_roster_reader<R: Read>(reader: R) -> RosterResult<Vec<TrainSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut roster = Vec::new();

    for (i, result) in csv_reader.deserialize::<RosterRecord>().enumerate() {
        let rec = result.map_err(|e| RosterError::Parse(e.to_string()))?;
        // Header is line 1, so data row `i` sits on line `i + 2`.
        let row = i + 2;
        let field = |source| RosterError::Field { row, source };

        let class: TrainClass = rec.class.parse().map_err(field)?;
        let start_time: SimTime = rec.start_time.parse().map_err(field)?;

        roster.push(TrainSpec::new(
            rec.train_no,
            class,
            rec.route_start,
            rec.route_end,
            start_time,
        ));
    }

    Ok(roster)
}
