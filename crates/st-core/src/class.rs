//! Train priority classes and per-class values.

use std::fmt;
use std::str::FromStr;

use crate::StError;

/// The priority class of a train.
///
/// Express trains run faster and take right of way over normal trains at
/// stations and on the line behind them.  Both classes are bound equally by
/// physical track occupancy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrainClass {
    Express,
    #[default]
    Normal,
}

impl TrainClass {
    #[inline]
    pub fn is_express(self) -> bool {
        matches!(self, TrainClass::Express)
    }

    /// Human-readable label, also the accepted CSV spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainClass::Express => "express",
            TrainClass::Normal  => "normal",
        }
    }
}

impl fmt::Display for TrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainClass {
    type Err = StError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" | "exp" => Ok(TrainClass::Express),
            "normal"          => Ok(TrainClass::Normal),
            other => Err(StError::Parse(format!(
                "invalid train class {other:?}: expected \"express\" or \"normal\""
            ))),
        }
    }
}

// ── ByClass ───────────────────────────────────────────────────────────────────

/// A value that differs per train class: travel minutes, dwell minutes, …
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByClass<T> {
    pub express: T,
    pub normal:  T,
}

impl<T: Copy> ByClass<T> {
    pub const fn new(express: T, normal: T) -> Self {
        Self { express, normal }
    }

    /// The value for `class`.
    #[inline]
    pub fn get(&self, class: TrainClass) -> T {
        match class {
            TrainClass::Express => self.express,
            TrainClass::Normal  => self.normal,
        }
    }
}
