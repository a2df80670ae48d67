//! Topology error type.

use thiserror::Error;

use st_core::StationId;

/// Errors produced while building or querying a [`Line`](crate::Line).
#[derive(Debug, Error)]
pub enum LineError {
    #[error("a line needs at least one station")]
    Empty,

    #[error("{what} length {got} does not match station count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("duplicate station name {0:?}")]
    DuplicateStation(String),

    #[error("station {0} not found on the line")]
    UnknownStation(StationId),

    #[error("stations {a} and {b} are not neighbours on the line")]
    NotAdjacent { a: StationId, b: StationId },

    #[error("no link from {from} to {to}: neighbouring stations must be linked both ways")]
    MissingLink { from: StationId, to: StationId },

    #[error("route index {index} out of bounds for a line of {len} stations")]
    RouteOutOfBounds { index: usize, len: usize },
}

pub type LineResult<T> = Result<T, LineError>;
