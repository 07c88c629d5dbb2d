//! `FloorQueue` — the two waiting lines at one floor.

use lift_core::{Floor, Passenger, QueueSide};

use crate::{PriorityQueue, QueueResult};

/// Ascending and descending priority queues for a single floor.
///
/// Every resident of the ascending side has a destination above `floor`;
/// every resident of the descending side has one below.
#[derive(Clone, Debug)]
pub struct FloorQueue {
    floor:      Floor,
    ascending:  PriorityQueue,
    descending: PriorityQueue,
}

impl FloorQueue {
    pub fn new(floor: Floor, capacity: usize) -> Self {
        Self {
            floor,
            ascending:  PriorityQueue::new(QueueSide::Ascending, capacity),
            descending: PriorityQueue::new(QueueSide::Descending, capacity),
        }
    }

    /// Cap growth of both sides at `max` entries each.
    pub fn with_max_capacity(mut self, max: Option<usize>) -> Self {
        self.ascending = self.ascending.with_max_capacity(max);
        self.descending = self.descending.with_max_capacity(max);
        self
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    /// Route `passenger` to the side matching their trip.
    ///
    /// Returns the side they joined, so the caller can light the matching
    /// call button.
    pub fn insert(&mut self, passenger: Passenger) -> QueueResult<QueueSide> {
        debug_assert_eq!(passenger.origin(), self.floor, "passenger queued at the wrong floor");
        let side = passenger.side();
        self.side_mut(side).insert(passenger)?;
        Ok(side)
    }

    /// Pop the head of `side`; `None` when that side is empty.
    #[inline]
    pub fn remove_highest_priority(&mut self, side: QueueSide) -> Option<Passenger> {
        self.side_mut(side).pop()
    }

    /// Return a passenger just popped from their side to its head.
    #[inline]
    pub fn restore_front(&mut self, passenger: Passenger) {
        let side = passenger.side();
        self.side_mut(side).restore_front(passenger);
    }

    #[inline]
    pub fn is_empty(&self, side: QueueSide) -> bool {
        self.side(side).is_empty()
    }

    /// `true` if anyone is waiting on either side.
    #[inline]
    pub fn has_waiting(&self) -> bool {
        !self.ascending.is_empty() || !self.descending.is_empty()
    }

    /// `true` if an elder or wheelchair user waits on either side.
    #[inline]
    pub fn has_priority_waiting(&self) -> bool {
        self.ascending.has_priority() || self.descending.has_priority()
    }

    #[inline]
    pub fn count_waiting(&self, side: QueueSide) -> usize {
        self.side(side).len()
    }

    #[inline]
    pub fn total_waiting(&self) -> usize {
        self.ascending.len() + self.descending.len()
    }

    /// Add one minute of wait to everyone on this floor.
    pub fn tick_wait_time(&mut self) {
        self.ascending.tick_wait();
        self.descending.tick_wait();
    }

    /// Owned copy of one side, head first (for display and summaries).
    pub fn snapshot(&self, side: QueueSide) -> Vec<Passenger> {
        self.side(side).snapshot()
    }

    /// Borrow one side directly.
    #[inline]
    pub fn side(&self, side: QueueSide) -> &PriorityQueue {
        match side {
            QueueSide::Ascending  => &self.ascending,
            QueueSide::Descending => &self.descending,
        }
    }

    #[inline]
    fn side_mut(&mut self, side: QueueSide) -> &mut PriorityQueue {
        match side {
            QueueSide::Ascending  => &mut self.ascending,
            QueueSide::Descending => &mut self.descending,
        }
    }
}
