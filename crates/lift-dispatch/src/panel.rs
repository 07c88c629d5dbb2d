//! Hall call buttons, one pair per floor.
//!
//! The panel is a cache of "is anyone waiting to go up/down here?" that the
//! controller rewrites from queue occupancy at the end of every step.  It
//! never drives a dispatch decision; it exists to be displayed.
//!
//! The top floor has no up button and the ground floor has no down button.
//! Operations on a missing button or an out-of-range floor are no-ops.

use lift_core::{Direction, Floor, QueueSide};
use tracing::trace;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallPanel {
    up:   Vec<bool>,
    down: Vec<bool>,
}

impl CallPanel {
    pub fn new(num_floors: u16) -> Self {
        Self {
            up:   vec![false; num_floors as usize],
            down: vec![false; num_floors as usize],
        }
    }

    #[inline]
    pub fn num_floors(&self) -> u16 {
        self.up.len() as u16
    }

    /// Whether `floor` physically has a button for `side`.
    pub fn has_button(&self, floor: Floor, side: QueueSide) -> bool {
        let n = self.up.len();
        match side {
            QueueSide::Ascending  => floor.index() + 1 < n,
            QueueSide::Descending => floor.index() > 0 && floor.index() < n,
        }
    }

    /// Light the button.  Returns `true` if it was dark before.
    pub fn press(&mut self, floor: Floor, side: QueueSide) -> bool {
        if !self.has_button(floor, side) {
            return false;
        }
        let slot = &mut self.buttons_mut(side)[floor.index()];
        let changed = !*slot;
        *slot = true;
        if changed {
            trace!(floor = floor.0, %side, "call button pressed");
        }
        changed
    }

    /// Turn the button off.  Returns `true` if it was lit before.
    pub fn clear(&mut self, floor: Floor, side: QueueSide) -> bool {
        if !self.has_button(floor, side) {
            return false;
        }
        let slot = &mut self.buttons_mut(side)[floor.index()];
        let changed = *slot;
        *slot = false;
        if changed {
            trace!(floor = floor.0, %side, "call button reset");
        }
        changed
    }

    /// Press or clear according to `lit`.
    pub fn set(&mut self, floor: Floor, side: QueueSide, lit: bool) {
        if lit {
            self.press(floor, side);
        } else {
            self.clear(floor, side);
        }
    }

    /// `false` for missing buttons and out-of-range floors.
    pub fn is_pressed(&self, floor: Floor, side: QueueSide) -> bool {
        self.buttons(side).get(floor.index()).copied().unwrap_or(false)
    }

    /// Press every button the floor has.
    pub fn press_floor(&mut self, floor: Floor) {
        for side in QueueSide::BOTH {
            self.press(floor, side);
        }
    }

    /// Clear both buttons on the floor.
    pub fn reset_floor(&mut self, floor: Floor) {
        for side in QueueSide::BOTH {
            self.clear(floor, side);
        }
    }

    /// Either button lit.
    pub fn is_floor_called(&self, floor: Floor) -> bool {
        QueueSide::BOTH.iter().any(|&side| self.is_pressed(floor, side))
    }

    /// First called floor strictly beyond `from` when travelling in
    /// `direction`.  `Idle` never finds anything.
    pub fn next_called_floor(&self, from: Floor, direction: Direction) -> Option<Floor> {
        let n = self.num_floors();
        match direction {
            Direction::Up => (from.0.saturating_add(1)..n)
                .map(Floor)
                .find(|&f| self.is_floor_called(f)),
            Direction::Down => (0..from.0.min(n))
                .rev()
                .map(Floor)
                .find(|&f| self.is_floor_called(f)),
            Direction::Idle => None,
        }
    }

    /// Number of lit buttons across the building.
    pub fn lit_count(&self) -> usize {
        self.up.iter().chain(&self.down).filter(|&&b| b).count()
    }

    #[inline]
    fn buttons(&self, side: QueueSide) -> &[bool] {
        match side {
            QueueSide::Ascending  => &self.up,
            QueueSide::Descending => &self.down,
        }
    }

    #[inline]
    fn buttons_mut(&mut self, side: QueueSide) -> &mut [bool] {
        match side {
            QueueSide::Ascending  => &mut self.up,
            QueueSide::Descending => &mut self.down,
        }
    }
}
