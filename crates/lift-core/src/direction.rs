//! Travel direction of an elevator and the side of a floor queue.

use crate::Floor;

/// Where an elevator is heading.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Parked, no committed travel.
    #[default]
    Idle,
    Up,
    Down,
}

impl Direction {
    /// `true` for `Up` and `Down`.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Idle)
    }

    /// Direction of travel from `from` towards `to`; `Idle` when equal.
    pub fn toward(from: Floor, to: Floor) -> Direction {
        use std::cmp::Ordering::*;
        match to.0.cmp(&from.0) {
            Greater => Direction::Up,
            Less    => Direction::Down,
            Equal   => Direction::Idle,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Idle => "idle",
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }

    /// Single-character glyph for the ASCII panel.
    pub fn glyph(self) -> char {
        match self {
            Direction::Idle => ' ',
            Direction::Up   => '^',
            Direction::Down => 'v',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which half of a floor's dual queue a passenger waits in.
///
/// Also names the call-panel button for that floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueueSide {
    /// Destination above the origin floor.
    Ascending,
    /// Destination below the origin floor.
    Descending,
}

impl QueueSide {
    pub const BOTH: [QueueSide; 2] = [QueueSide::Ascending, QueueSide::Descending];

    /// Side a trip from `origin` to `destination` queues on.
    ///
    /// Anything that is not strictly upwards goes descending.
    #[inline]
    pub fn for_trip(origin: Floor, destination: Floor) -> QueueSide {
        if destination > origin {
            QueueSide::Ascending
        } else {
            QueueSide::Descending
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueueSide::Ascending  => "up",
            QueueSide::Descending => "down",
        }
    }
}

impl std::fmt::Display for QueueSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
