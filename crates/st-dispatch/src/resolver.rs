//! The Go/Wait conflict resolver.
//!
//! Given a train standing at its current station with a proposed departure
//! time, decide whether it may enter the segment towards its next station
//! now, or must retry later.  Four rules interact:
//!
//! 1. **Segment exclusivity**: the segment's reservation must be released
//!    by the proposed departure.  Binds every class.
//! 2. **Oncoming queue**: a normal train never enters a segment that an
//!    express train waiting at the far station is about to take head-on.
//! 3. **Station-ahead deference**: a normal train holds while an express
//!    train at the same station, heading the same way, would be delayed by
//!    more than the tolerance window.
//! 4. **Backward headway**: a normal train holds while an express train
//!    that recently arrived within one segment's worth of express running
//!    time down the line is too close.
//!
//! Express trains are subject to rule 1 only.

use std::fmt;

use st_core::{DispatchConfig, SimTime, StationId, TrainClass};
use st_line::{Line, Segment};

use crate::{Occupancy, Train, TrainStore};

// ── Decision ──────────────────────────────────────────────────────────────────

/// Which rule held a train back.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum WaitReason {
    SegmentOccupied,
    OncomingExpress,
    ExpressAtStation,
    ExpressBehind,
}

impl WaitReason {
    pub fn as_str(self) -> &'static str {
        match self {
            WaitReason::SegmentOccupied  => "segment occupied",
            WaitReason::OncomingExpress  => "oncoming express",
            WaitReason::ExpressAtStation => "express at station",
            WaitReason::ExpressBehind    => "express behind",
        }
    }
}

/// The resolver's verdict for one advancement attempt.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Decision {
    /// Enter the segment at `departure`.
    Go { departure: SimTime },
    /// Stay put and retry at `until`.
    Wait { until: SimTime, reason: WaitReason },
}

impl Decision {
    #[inline]
    pub fn is_go(self) -> bool {
        matches!(self, Decision::Go { .. })
    }

    /// The departure (Go) or retry (Wait) time.
    #[inline]
    pub fn time(self) -> SimTime {
        match self {
            Decision::Go { departure }  => departure,
            Decision::Wait { until, .. } => until,
        }
    }

    pub fn wait_reason(self) -> Option<WaitReason> {
        match self {
            Decision::Go { .. }           => None,
            Decision::Wait { reason, .. } => Some(reason),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Go { departure }       => write!(f, "Go at {departure}"),
            Decision::Wait { until, reason } => write!(f, "Wait until {until} ({})", reason.as_str()),
        }
    }
}

/// Trains at the next station queued to take the same segment head-on.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct OpposingQueue {
    /// Latest predicted segment entry among them.
    pub latest:      SimTime,
    pub has_express: bool,
    pub count:       usize,
}

// ── ConflictResolver ──────────────────────────────────────────────────────────

/// Read-only view over the line, the trains and the occupancy tracker.
///
/// Built fresh for each decision; holds no state of its own.
pub struct ConflictResolver<'a> {
    line:      &'a Line,
    trains:    &'a TrainStore,
    occupancy: &'a Occupancy,
    config:    &'a DispatchConfig,
}

impl<'a> ConflictResolver<'a> {
    pub fn new(
        line:      &'a Line,
        trains:    &'a TrainStore,
        occupancy: &'a Occupancy,
        config:    &'a DispatchConfig,
    ) -> Self {
        Self { line, trains, occupancy, config }
    }

    /// Decide whether `train` may depart at `proposed`.
    ///
    /// A train with no next station (at its terminus or terminal) has nothing
    /// to conflict with and always gets Go.
    pub fn can_proceed(&self, train: &Train, proposed: SimTime) -> Decision {
        let Some((here, next)) = hop(train) else {
            return Decision::Go { departure: proposed };
        };

        if let Some(release) = self.segment_reserved_until(Segment::new(here, next), proposed) {
            return self.wait(proposed, release, WaitReason::SegmentOccupied);
        }
        if train.is_express() {
            return Decision::Go { departure: proposed };
        }

        if let Some(queue) = self.opposing_queue(train, proposed) {
            if queue.has_express {
                return self.wait(proposed, queue.latest.max(proposed), WaitReason::OncomingExpress);
            }
        }

        let at_station = self.control_this_station(train, proposed);
        let behind = self.control_back(train, proposed);
        // A wait at the station outranks one for an express behind.
        let until = at_station.time().max(behind.time());
        match (at_station, behind) {
            (Decision::Go { departure: a }, Decision::Go { departure: b }) => {
                Decision::Go { departure: a.min(b) }
            }
            (Decision::Wait { reason, .. }, _) | (Decision::Go { .. }, Decision::Wait { reason, .. }) => {
                self.wait(proposed, until, reason)
            }
        }
    }

    /// `Some(release)` when `segment` is still held at `proposed`.
    #[inline]
    pub fn segment_reserved_until(&self, segment: Segment, proposed: SimTime) -> Option<SimTime> {
        self.occupancy.reserved_until(segment, proposed)
    }

    /// Trains at `train`'s next station whose own next hop is `train`'s
    /// current station.
    ///
    /// Each one's predicted entry is its own travel time over the shared
    /// segment added to `proposed`.  `None` when there are no such trains.
    pub fn opposing_queue(&self, train: &Train, proposed: SimTime) -> Option<OpposingQueue> {
        let (here, next) = hop(train)?;

        let mut queue: Option<OpposingQueue> = None;
        for p in self.occupancy.present_at(next) {
            let other = self.trains.get(p.train);
            if other.next_station() != Some(here) {
                continue;
            }
            let from = other.current_station().unwrap_or(next);
            let entry = proposed + self.travel(from, here, other.class);
            let q = queue.get_or_insert(OpposingQueue {
                latest:      entry,
                has_express: false,
                count:       0,
            });
            q.latest = q.latest.max(entry);
            q.has_express |= other.is_express();
            q.count += 1;
        }
        queue
    }

    /// Station-ahead express deference.
    ///
    /// Express trains always get Go.  A normal train waits when an express
    /// train at the same station heading for the same next station arrived so
    /// long before this train would reach that next station that the gap
    /// exceeds `express_max_wait`.
    pub fn control_this_station(&self, train: &Train, proposed: SimTime) -> Decision {
        let go = Decision::Go { departure: proposed };
        if train.is_express() {
            return go;
        }
        let Some((here, next)) = hop(train) else {
            return go;
        };

        let next_arrival = proposed + self.travel(here, next, train.class);
        let tolerance = self.config.express_max_wait;

        let latest_express = self
            .occupancy
            .present_at(here)
            .iter()
            .filter(|p| p.train != train.id || p.arrival <= proposed + tolerance)
            .filter(|p| p.class.is_express())
            .filter(|p| self.trains.get(p.train).next_station() == Some(next))
            .map(|p| p.arrival)
            .max();

        match latest_express {
            Some(express_arrival) if next_arrival.since(express_arrival) > tolerance => {
                let until = (proposed + self.config.retry_step).max(express_arrival);
                Decision::Wait { until, reason: WaitReason::ExpressAtStation }
            }
            _ => go,
        }
    }

    /// Backward express-headway check.
    ///
    /// Walks down the line from the current station, collecting stations
    /// until the accumulated express running time covers this train's
    /// running time over the segment it is about to enter (or the line's
    /// start is reached).  The first express train found in that window
    /// decides: arrived after `next_arrival - express_max_wait` ⇒ Wait one
    /// retry step, otherwise Go.
    pub fn control_back(&self, train: &Train, proposed: SimTime) -> Decision {
        let go = Decision::Go { departure: proposed };
        if train.is_express() {
            return go;
        }
        let Some((here, next)) = hop(train) else {
            return go;
        };

        let travel = self.travel(here, next, train.class);
        let threshold = (proposed + travel) - self.config.express_max_wait;

        let mut window = Vec::new();
        let mut covered = 0;
        let mut last = here;
        while covered < travel {
            let Some(back) = last.prev() else { break };
            covered += self.travel(back, last, TrainClass::Express);
            window.push(back);
            last = back;
        }

        for station in window {
            if let Some(p) = self.occupancy.present_at(station).iter().find(|p| p.class.is_express()) {
                return if p.arrival > threshold {
                    Decision::Wait {
                        until:  proposed + self.config.retry_step,
                        reason: WaitReason::ExpressBehind,
                    }
                } else {
                    go
                };
            }
        }
        go
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Routes only hop between neighbours, which a built line links both ways.
    #[inline]
    fn travel(&self, from: StationId, to: StationId, class: TrainClass) -> u32 {
        self.line.travel(from, to, class).unwrap_or(0)
    }

    /// Wait at `until`, never earlier than one retry step past `proposed`.
    #[inline]
    fn wait(&self, proposed: SimTime, until: SimTime, reason: WaitReason) -> Decision {
        Decision::Wait {
            until: until.max(proposed + self.config.retry_step),
            reason,
        }
    }
}

/// `(current, next)` stations of a train that still has a segment ahead.
#[inline]
fn hop(train: &Train) -> Option<(StationId, StationId)> {
    Some((train.current_station()?, train.next_station()?))
}
