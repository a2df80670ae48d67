//! `st-dispatch` — train state, occupancy tracking and conflict resolution.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`train`]     | `Train`, `TrainStore`, `LogEntry`                              |
//! | [`occupancy`] | `Occupancy`: segment reservations and per-station presence sets |
//! | [`resolver`]  | `ConflictResolver`, `Decision`, `WaitReason`                   |
//! | [`error`]     | `DispatchError`, `DispatchResult<T>`                           |
//!
//! # Decision procedure (summary)
//!
//! ```text
//! segment reserved past proposed departure  → Wait(release)      (all classes)
//! express                                   → Go
//! oncoming queue at next station has express → Wait(queue time)
//! else station-ahead rule AND backward rule → Go, otherwise Wait(max)
//! every Wait is floored at proposed + retry_step
//! ```
//!
//! The resolver only reads state.  `st-sim` applies the decision: on Go it
//! updates the reservation, both presence sets and the train's position in
//! one step before the next event is popped.

pub mod error;
pub mod occupancy;
pub mod resolver;
pub mod train;

#[cfg(test)]
mod tests;

pub use error::{DispatchError, DispatchResult};
pub use occupancy::{Occupancy, Presence, Reservation};
pub use resolver::{ConflictResolver, Decision, OpposingQueue, WaitReason};
pub use train::{LogEntry, Train, TrainStore};
