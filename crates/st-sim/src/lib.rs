//! `st-sim` — event loop orchestrator for the single-track simulator.
//!
//! # Event loop
//!
//! ```text
//! while events remain and processed < config.max_events:
//!   ① Pop      — earliest (time, train_no) event; terminal trains are skipped.
//!   ② Log      — arrival = max(train.time, event.time); proposed departure
//!                = arrival + dwell; append {station, arrival, departure}.
//!   ③ Terminus — last station on the route: mark terminal, no new event.
//!   ④ Resolve  — ConflictResolver::can_proceed → Go or Wait.
//!   ⑤ Apply    — Go:   reserve segment, move between presence sets,
//!                      advance, push event at predicted arrival.
//!                Wait: amend departure, push event at the retry time.
//! ```
//!
//! A run that exhausts `max_events` with events still queued returns
//! [`RunOutcome::Truncated`] instead of pretending to have finished.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use st_line::LineBuilder;
//! use st_sim::{NoopObserver, SimBuilder};
//!
//! let line = LineBuilder::from_arrays(&names, &exp, &normal, &dwell_exp, &dwell_normal)?;
//! let mut sim = SimBuilder::new(line, roster).build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! for record in sim.itinerary() {
//!     println!("{record}");
//! }
//! ```

pub mod builder;
pub mod error;
pub mod itinerary;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use itinerary::{itinerary, merge_log, ItineraryRecord};
pub use observer::{DispatchObserver, NoopObserver};
pub use sim::{RunOutcome, Sim};
