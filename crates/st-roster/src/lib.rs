//! `st-roster` — train roster, CSV loading and the event queue.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`spec`]        | `TrainSpec`: one roster entry                           |
//! | [`event_queue`] | `EventQueue`, `Event` (min-heap on `(time, train_no)`)  |
//! | [`loader`]      | `load_roster_csv`, `load_roster_reader`                 |
//! | [`error`]       | `RosterError`, `RosterResult<T>`                        |
//!
//! # Event ordering
//!
//! ```text
//! pop order = ascending time, then ascending train number
//! ```
//!
//! The tie-break on the public train number (not the arena index) keeps a
//! run reproducible for identical inputs regardless of roster order.

pub mod error;
pub mod event_queue;
pub mod loader;
pub mod spec;


pub use error::{RosterError, RosterResult};
pub use event_queue::{Event, EventQueue};
pub use loader::{load_roster_csv, load_roster_reader};
pub use spec::TrainSpec;
