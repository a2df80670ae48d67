//! eskisehir — dispatch the Eskişehir–Balıkesir single-track line.
//!
//! Seven trains (three express, four normal) share one track with passing
//! loops at every station.  Writes the merged itinerary as CSV (and SQLite
//! with `--features sqlite`) plus `itinerary.json` for the timeline plotter.
//!
//! Usage: `eskisehir [OUTPUT_DIR]` (default `output/eskisehir`).
//! Set `RUST_LOG=debug` to see every Go/Wait decision.

mod line;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use st_core::{DispatchConfig, SimTime, StationId};
use st_dispatch::{Decision, Train, TrainStore, WaitReason};
use st_line::Line;
use st_output::{DispatchOutputObserver, OutputWriter};
use st_roster::load_roster_reader;
use st_sim::{DispatchObserver, ItineraryRecord, RunOutcome, SimBuilder};

use line::build_line;

// ── Roster CSV ────────────────────────────────────────────────────────────────

// Route indices refer to `line::STATION_NAMES`; 31 = BALIKESİR.
const ROSTER_CSV: &str = "\
train_no,class,route_start,route_end,start_time\n\
61353,normal,0,31,05:05\n\
62352,express,0,31,08:51\n\
60351,normal,0,31,06:20\n\
82166,express,31,0,05:25\n\
83164,normal,30,0,06:20\n\
82167,express,31,0,08:51\n\
91165,normal,31,0,05:05\n\
";

// ── Observer wrapper to tally waits ──────────────────────────────────────────

struct TallyingObserver<W: OutputWriter> {
    inner: DispatchOutputObserver<W>,
    /// train number → (reason → count)
    waits: BTreeMap<u32, BTreeMap<&'static str, u32>>,
}

impl<W: OutputWriter> TallyingObserver<W> {
    fn new(inner: DispatchOutputObserver<W>) -> Self {
        Self { inner, waits: BTreeMap::new() }
    }
}

impl<W: OutputWriter> DispatchObserver for TallyingObserver<W> {
    fn on_decision(&mut self, train: &Train, proposed: SimTime, decision: Decision) {
        if let Some(reason) = decision.wait_reason() {
            *self.waits.entry(train.number).or_default().entry(reason_label(reason)).or_default() += 1;
        }
        self.inner.on_decision(train, proposed, decision);
    }

    fn on_commit(&mut self, train: &Train, from: StationId, to: StationId, dep: SimTime, arr: SimTime) {
        self.inner.on_commit(train, from, to, dep, arr);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome, line: &Line, trains: &TrainStore) {
        self.inner.on_run_end(outcome, line, trains);
    }
}

fn reason_label(reason: WaitReason) -> &'static str {
    match reason {
        WaitReason::SegmentOccupied  => "segment",
        WaitReason::OncomingExpress  => "oncoming",
        WaitReason::ExpressAtStation => "station",
        WaitReason::ExpressBehind    => "behind",
    }
}

// ── Output backend ────────────────────────────────────────────────────────────

#[cfg(not(feature = "sqlite"))]
fn open_writer(dir: &std::path::Path) -> Result<st_output::CsvWriter> {
    Ok(st_output::CsvWriter::new(dir)?)
}

#[cfg(feature = "sqlite")]
fn open_writer(dir: &std::path::Path) -> Result<st_output::SqliteWriter> {
    Ok(st_output::SqliteWriter::new(dir)?)
}

/// Timeline records in the shape the plotter reads.
fn write_json(path: &std::path::Path, records: &[ItineraryRecord]) -> Result<()> {
    let timeline: Vec<serde_json::Value> = records
        .iter()
        .map(|r| {
            serde_json::json!({
                "train":   r.train_no,
                "class":   r.class.as_str(),
                "station": r.station,
                "arr":     r.arrival.to_string(),
                "dep":     r.departure.to_string(),
            })
        })
        .collect();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &timeline)?;
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output/eskisehir"));

    println!("=== eskisehir — single-track dispatch ===");

    // 1. Line and roster.
    let line = build_line()?;
    let roster = load_roster_reader(Cursor::new(ROSTER_CSV))?;
    println!("Line: {} stations  |  Trains: {}", line.len(), roster.len());

    // 2. Sim.
    let config = DispatchConfig::default();
    println!(
        "Express tolerance: {} min  |  Retry step: {} min  |  Event bound: {}",
        config.express_max_wait, config.retry_step, config.max_events
    );
    println!();
    let mut sim = SimBuilder::new(line, roster).config(config).build()?;

    // 3. Output.
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let mut obs = TallyingObserver::new(DispatchOutputObserver::new(open_writer(&out_dir)?));

    // 4. Run.
    let t0 = Instant::now();
    let outcome = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    if !outcome.is_complete() {
        log::warn!("itinerary is partial: {outcome}");
    }

    let records = sim.itinerary();
    write_json(&out_dir.join("itinerary.json"), &records)?;

    // 5. Summary.
    println!("Dispatch {outcome} in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!("Output written to {}", out_dir.display());
    println!();

    // 6. Per-train timetable.
    for train in sim.trains.iter() {
        let waits = obs
            .waits
            .get(&train.number)
            .map(|by_reason| {
                by_reason.iter().map(|(r, n)| format!("{r}×{n}")).collect::<Vec<_>>().join(" ")
            })
            .unwrap_or_else(|| "none".to_owned());
        println!("Train {} ({})  waits: {waits}", train.number, train.class);
        println!("  {:<12} {:>5} {:>5}", "Station", "Arr", "Dep");
        for r in records.iter().filter(|r| r.train_no == train.number) {
            println!("  {:<12} {:>5} {:>5}", r.station, r.arrival, r.departure);
        }
        println!();
    }

    Ok(())
}
