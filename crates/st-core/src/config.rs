//! Dispatch configuration.

use crate::{StError, StResult};

/// Tunable constants of the dispatch rules and the event loop.
///
/// Typically left at [`Default`] or loaded by the application and passed to
/// `st_sim::SimBuilder::config`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Tolerance window in minutes.  A normal train may go ahead of an
    /// express train (or trail one) only while the time gap stays within it.
    /// Default: 5.
    pub express_max_wait: u32,

    /// Minimum forward step in minutes applied to every Wait decision, so a
    /// retry never happens at an unchanged timestamp.  Default: 1.
    pub retry_step: u32,

    /// Hard bound on processed events.  A run that hits it ends early and
    /// reports itself as truncated.  Default: 1000.
    pub max_events: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            express_max_wait: 5,
            retry_step:       1,
            max_events:       1_000,
        }
    }
}

impl DispatchConfig {
    /// Reject values that would stall the event loop.
    pub fn validate(&self) -> StResult<()> {
        if self.retry_step == 0 {
            return Err(StError::Config("retry_step must be at least 1 minute".into()));
        }
        if self.max_events == 0 {
            return Err(StError::Config("max_events must be positive".into()));
        }
        Ok(())
    }
}
