//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use st_core::{DispatchConfig, TrainId};
use st_dispatch::{Occupancy, Presence, Train, TrainStore};
use st_line::Line;
use st_roster::{EventQueue, TrainSpec};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`Line`]: stations, links, dwell times
/// - roster: one [`TrainSpec`] per train, in the order results are reported
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                       |
/// |---------------|-------------------------------|
/// | `.config(c)`  | `DispatchConfig::default()`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(line, roster)
///     .config(DispatchConfig { max_events: 5_000, ..Default::default() })
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    line:   Line,
    roster: Vec<TrainSpec>,
    config: Option<DispatchConfig>,
}

impl SimBuilder {
    pub fn new(line: Line, roster: Vec<TrainSpec>) -> Self {
        Self { line, roster, config: None }
    }

    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate inputs, place every train at its origin, seed the event
    /// queue, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let mut numbers = HashSet::with_capacity(self.roster.len());
        for spec in &self.roster {
            if !numbers.insert(spec.number) {
                return Err(SimError::DuplicateTrain(spec.number));
            }
        }

        let mut occupancy = Occupancy::new(self.line.len());
        let mut queue = EventQueue::with_capacity(self.roster.len());
        let mut trains = Vec::with_capacity(self.roster.len());

        for (i, spec) in self.roster.into_iter().enumerate() {
            let route = self
                .line
                .route(spec.route_start, spec.route_end)
                .map_err(|source| SimError::Route { train: spec.number, source })?;
            let id = TrainId(i as u32);
            let origin = route[0];

            occupancy.arrive(origin, Presence {
                train:   id,
                arrival: spec.start_time,
                class:   spec.class,
            });
            queue.push(spec.start_time, spec.number, id);
            trains.push(Train::new(id, spec.number, spec.class, route, spec.start_time));
        }

        Ok(Sim {
            config,
            line: self.line,
            trains: TrainStore::new(trains),
            occupancy,
            queue,
            processed: 0,
        })
    }
}
