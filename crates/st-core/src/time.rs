//! Simulation time model.
//!
//! # Design
//!
//! Time is a whole number of minutes since 00:00 of the simulated day.  Every
//! travel, dwell and tolerance value in the input data is an integer number
//! of minutes, so schedule arithmetic stays exact and comparisons are O(1).
//!
//! The simulation assumes a single-day horizon: `Display` prints hours past
//! 23 as-is (`24:10`) rather than wrapping to the next day.

use std::fmt;
use std::str::FromStr;

use crate::StError;

/// An absolute simulation timestamp in minutes since 00:00.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u32);

impl SimTime {
    pub const MIDNIGHT: SimTime = SimTime(0);

    /// Build a timestamp from an hour and minute of the day.
    #[inline]
    pub const fn hm(hours: u32, minutes: u32) -> SimTime {
        SimTime(hours * 60 + minutes)
    }

    /// Like [`hm`](Self::hm), but `None` when the total does not fit.
    #[inline]
    pub fn checked_hm(hours: u32, minutes: u32) -> Option<SimTime> {
        hours.checked_mul(60)?.checked_add(minutes).map(SimTime)
    }

    #[inline]
    pub fn hours(self) -> u32 {
        self.0 / 60
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.0 % 60
    }

    /// Minutes from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u32 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u32> for SimTime {
    type Output = SimTime;
    /// Add minutes, saturating at `u32::MAX`.
    #[inline]
    fn add(self, rhs: u32) -> SimTime {
        SimTime(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub<u32> for SimTime {
    type Output = SimTime;
    /// Subtract minutes, saturating at midnight.
    #[inline]
    fn sub(self, rhs: u32) -> SimTime {
        SimTime(self.0.saturating_sub(rhs))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for SimTime {
    type Err = StError;

    /// Parse `HH:MM` (minutes must be `< 60`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || StError::Parse(format!("invalid time {s:?}: expected HH:MM"));
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        let hours: u32 = h.parse().map_err(|_| bad())?;
        let minutes: u32 = m.parse().map_err(|_| bad())?;
        if minutes >= 60 || m.len() != 2 {
            return Err(bad());
        }
        SimTime::checked_hm(hours, minutes)
            .ok_or_else(|| StError::Parse(format!("time {s:?} is out of range")))
    }
}
