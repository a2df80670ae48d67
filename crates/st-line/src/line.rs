//! Line representation and builder.
//!
//! # Data layout
//!
//! Stations are stored in line order and indexed by `StationId`.  Each
//! station owns at most two outgoing [`Link`]s (towards `id - 1` and
//! `id + 1`), so neighbour lookups are a scan of a two-element slice.

use std::collections::HashSet;

use st_core::{ByClass, StationId, TrainClass};

use crate::{LineError, LineResult};

// ── Station ───────────────────────────────────────────────────────────────────

/// A directed connection from one station to an immediate neighbour.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub to:     StationId,
    /// Travel minutes per class.
    pub travel: ByClass<u32>,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id:    StationId,
    pub name:  String,
    /// Minimum dwell minutes per class.
    pub dwell: ByClass<u32>,
    pub links: Vec<Link>,
}

impl Station {
    /// The link from this station to `to`, if they are neighbours.
    #[inline]
    pub fn link_to(&self, to: StationId) -> Option<&Link> {
        self.links.iter().find(|l| l.to == to)
    }
}

// ── Line ──────────────────────────────────────────────────────────────────────

/// An ordered single-track line.  Build with [`LineBuilder`]; it is
/// serialize-only so every `Line` has passed `build`'s link checks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Line {
    stations: Vec<Station>,
}

impl Line {
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always `false` for a built line; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// The station at `id`.
    ///
    /// # Panics
    /// Panics if `id` is not on this line.  IDs handed out by the builder and
    /// by [`route`](Self::route) are always valid.
    #[inline]
    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    /// Travel minutes for `class` from `from` to its neighbour `to`.
    #[inline]
    pub fn travel(&self, from: StationId, to: StationId, class: TrainClass) -> Option<u32> {
        self.get(from)?.link_to(to).map(|l| l.travel.get(class))
    }

    /// Minimum dwell minutes for `class` at `at`.
    #[inline]
    pub fn dwell(&self, at: StationId, class: TrainClass) -> u32 {
        self.station(at).dwell.get(class)
    }

    /// The contiguous run of stations from index `start` to index `end`,
    /// inclusive.  Reversed when `start > end`, which models a train running
    /// against the line's order.
    pub fn route(&self, start: usize, end: usize) -> LineResult<Vec<StationId>> {
        let len = self.len();
        for index in [start, end] {
            if index >= len {
                return Err(LineError::RouteOutOfBounds { index, len });
            }
        }
        let ids = |r: std::ops::RangeInclusive<usize>| r.map(|i| StationId(i as u32));
        Ok(if start <= end {
            ids(start..=end).collect()
        } else {
            ids(end..=start).rev().collect()
        })
    }
}

// ── LineBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Line`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use st_core::ByClass;
/// use st_line::LineBuilder;
///
/// let mut b = LineBuilder::new();
/// let a = b.add_station("A", ByClass::new(0, 0));
/// let c = b.add_station("B", ByClass::new(1, 2));
/// b.add_track(a, c, ByClass::new(10, 14));
/// let line = b.build().unwrap();
/// assert_eq!(line.len(), 2);
/// ```
#[derive(Default)]
pub struct LineBuilder {
    stations:  Vec<(String, ByClass<u32>)>,
    raw_links: Vec<RawLink>,
}

struct RawLink {
    from:   StationId,
    to:     StationId,
    travel: ByClass<u32>,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a station at the end of the line and return its `StationId`.
    pub fn add_station(&mut self, name: impl Into<String>, dwell: ByClass<u32>) -> StationId {
        let id = StationId(self.stations.len() as u32);
        self.stations.push((name.into(), dwell));
        id
    }

    /// Add a **directed** link from `from` to `to`.
    pub fn add_directed_link(&mut self, from: StationId, to: StationId, travel: ByClass<u32>) {
        self.raw_links.push(RawLink { from, to, travel });
    }

    /// Convenience: link two neighbours in both directions with the same times.
    pub fn add_track(&mut self, a: StationId, b: StationId, travel: ByClass<u32>) {
        self.add_directed_link(a, b, travel);
        self.add_directed_link(b, a, travel);
    }

    /// Build a line from parallel per-station arrays.
    ///
    /// `travel_*[i]` is the time from station `i` to station `i + 1` (the last
    /// entry is ignored); the reverse direction uses the same value.  Every
    /// array must be as long as `names`.
    pub fn from_arrays<S: AsRef<str>>(
        names:          &[S],
        travel_express: &[u32],
        travel_normal:  &[u32],
        dwell_express:  &[u32],
        dwell_normal:   &[u32],
    ) -> LineResult<Line> {
        let expected = names.len();
        for (what, got) in [
            ("express travel times", travel_express.len()),
            ("normal travel times",  travel_normal.len()),
            ("express dwell times",  dwell_express.len()),
            ("normal dwell times",   dwell_normal.len()),
        ] {
            if got != expected {
                return Err(LineError::LengthMismatch { expected, got, what });
            }
        }

        let mut b = Self::new();
        let ids: Vec<StationId> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                b.add_station(name.as_ref(), ByClass::new(dwell_express[i], dwell_normal[i]))
            })
            .collect();
        for (i, pair) in ids.windows(2).enumerate() {
            b.add_track(pair[0], pair[1], ByClass::new(travel_express[i], travel_normal[i]));
        }
        b.build()
    }

    /// Validate and produce a [`Line`].
    ///
    /// Fails on an empty line, duplicate names, links to unknown stations,
    /// links between non-neighbours, or a neighbour pair left unlinked in
    /// either direction.  A repeated link replaces the earlier one.
    pub fn build(self) -> LineResult<Line> {
        if self.stations.is_empty() {
            return Err(LineError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.stations.len());
        for (name, _) in &self.stations {
            if !seen.insert(name.as_str()) {
                return Err(LineError::DuplicateStation(name.clone()));
            }
        }

        let count = self.stations.len();
        let mut stations: Vec<Station> = self
            .stations
            .into_iter()
            .enumerate()
            .map(|(i, (name, dwell))| Station {
                id: StationId(i as u32),
                name,
                dwell,
                links: Vec::with_capacity(2),
            })
            .collect();

        for raw in self.raw_links {
            for id in [raw.from, raw.to] {
                if id.index() >= count {
                    return Err(LineError::UnknownStation(id));
                }
            }
            if raw.from.0.abs_diff(raw.to.0) != 1 {
                return Err(LineError::NotAdjacent { a: raw.from, b: raw.to });
            }
            let links = &mut stations[raw.from.index()].links;
            links.retain(|l| l.to != raw.to);
            links.push(Link { to: raw.to, travel: raw.travel });
        }

        // Every consecutive pair must be runnable in both directions.
        for i in 1..count {
            let (a, b) = (StationId(i as u32 - 1), StationId(i as u32));
            for (from, to) in [(a, b), (b, a)] {
                if stations[from.index()].link_to(to).is_none() {
                    return Err(LineError::MissingLink { from, to });
                }
            }
        }

        Ok(Line { stations })
    }
}
