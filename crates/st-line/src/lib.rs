//! `st-line` — single-track line topology.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`line`]    | `Line`, `Station`, `Link`, `LineBuilder`                    |
//! | [`segment`] | `Segment`: canonical key for the track between two stations |
//! | [`error`]   | `LineError`, `LineResult<T>`                               |
//!
//! # Model
//!
//! A line is an ordered list of stations.  Station `i` links only to its
//! neighbours `i - 1` and `i + 1`; each link carries separate express and
//! normal travel minutes.  Trains running against the line's order use the
//! same links with the station order reversed.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types (`Serialize` only on `Line`). |

pub mod error;
pub mod line;
pub mod segment;


pub use error::{LineError, LineResult};
pub use line::{Line, LineBuilder, Link, Station};
pub use segment::Segment;
