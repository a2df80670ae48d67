use st_core::{StError, StationId};
use st_dispatch::DispatchError;
use st_line::LineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] StError),

    #[error("train {train}: invalid route: {source}")]
    Route {
        train:  u32,
        #[source]
        source: LineError,
    },

    #[error("train number {0} appears more than once in the roster")]
    DuplicateTrain(u32),

    #[error("no link from {from} to {to}")]
    MissingLink { from: StationId, to: StationId },

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

pub type SimResult<T> = Result<T, SimError>;
