//! `EventQueue`: time-ordered queue of pending train advancement attempts.
//!
//! Each train has at most one pending event.  The simulation pops the
//! earliest one, decides Go or Wait for that train, and pushes exactly one
//! new event for it (unless it reached its terminus).
//!
//! `BinaryHeap` over `Reverse<Event>` gives O(log n) push and pop; `n` is
//! the number of trains, so the constant is tiny.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use st_core::{SimTime, TrainId};

/// A pending advancement attempt.
///
/// Field order is the ordering key: `time`, then the public train `number`,
/// then the arena index (which only matters for malformed rosters with
/// duplicate numbers, rejected at build time).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Event {
    pub time:   SimTime,
    pub number: u32,
    pub train:  TrainId,
}

/// A min-priority queue of [`Event`]s.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Event>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(trains: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(trains) }
    }

    /// Schedule `train` (service `number`) to be processed at `time`.
    pub fn push(&mut self, time: SimTime, number: u32, train: TrainId) {
        self.heap.push(Reverse(Event { time, number, train }));
    }

    /// Remove and return the earliest event.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    /// The earliest pending event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|Reverse(e)| e)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
