//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into the fleet and floor `Vec`s via `id.0 as usize`, but
//! callers should prefer the `.index()` helpers for clarity.

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
    /// Sequence number of a generated passenger.  The first passenger is `1`.
    pub struct PassengerId(u32);
}

typed_id! {
    /// Position of an elevator in the fleet array.
    pub struct ElevatorId(u16);
}

typed_id! {
    /// A floor index, `0` being the ground floor.
    pub struct Floor(u16);
}

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// Absolute number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u16 {
        self.0.abs_diff(other.0)
    }

    /// The floor one hop above.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor one hop below.
    ///
    /// # Panics
    /// Panics in debug mode when called on the ground floor.
    #[inline]
    pub fn down(self) -> Floor {
        Floor(self.0 - 1)
    }
}
