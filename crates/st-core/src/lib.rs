//! `st-core` — foundational types for the single-track dispatch simulator.
//!
//! This crate is a dependency of every other `st-*` crate.  It has no `st-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StationId`, `TrainId`                                |
//! | [`time`]        | `SimTime` (minutes since 00:00, `HH:MM` text form)    |
//! | [`class`]       | `TrainClass` (express / normal)                       |
//! | [`config`]      | `DispatchConfig` (tolerance, retry step, event bound) |
//! | [`error`]       | `StError`, `StResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod class;
pub mod config;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use class::{ByClass, TrainClass};
pub use config::DispatchConfig;
pub use error::{StError, StResult};
pub use ids::{StationId, TrainId};
pub use time::SimTime;
