use st_core::StError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("roster row {row}: {source}")]
    Field {
        row:    usize,
        #[source]
        source: StError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
