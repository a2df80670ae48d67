//! Strongly typed, zero-cost identifier wrappers.
//!
//! Stations and trains live in index-addressed arenas (`Line`, `TrainStore`),
//! so both IDs are positions into a `Vec`.  A train's public service number
//! is separate data on the train itself; see `st_dispatch::Train::number`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of a station along the line, 0-based from the line's start.
    /// Backward scans walk this index down towards 0.
    pub struct StationId(u32);
}

typed_id! {
    /// Index of a train in the simulation's train arena (roster order).
    pub struct TrainId(u32);
}

impl StationId {
    /// The station one position further down the line, or `None` at index 0.
    #[inline]
    pub fn prev(self) -> Option<StationId> {
        self.0.checked_sub(1).map(StationId)
    }
}
