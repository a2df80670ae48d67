use st_core::TrainId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("train {0} has no next station to advance to")]
    Terminal(TrainId),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
