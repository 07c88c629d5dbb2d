//! `PriorityQueue` — one side of a floor's waiting line.
//!
//! # Layout
//!
//! A `VecDeque<Passenger>` kept sorted head-first by [`PriorityClass`],
//! stable within a class.  Insertion scans from the tail for the first
//! entry whose class is at least the newcomer's and slots in right behind
//! it, so a burst of same-class arrivals costs O(1) each.  Popping the head
//! is O(1).
//!
//! # Capacity
//!
//! The queue tracks a logical capacity separately from the allocation.
//! When an insert finds it full, the capacity doubles (clamped to the
//! optional ceiling) and storage is reserved with `try_reserve_exact`, so an
//! allocator refusal surfaces as [`QueueError::CapacityExhausted`] instead
//! of aborting the process.

use std::collections::VecDeque;

use lift_core::config::DEFAULT_QUEUE_CAPACITY;
use lift_core::{Passenger, PriorityClass, QueueSide};

use crate::{QueueError, QueueResult};

#[derive(Clone, Debug)]
pub struct PriorityQueue {
    side:         QueueSide,
    items:        VecDeque<Passenger>,
    capacity:     usize,
    max_capacity: Option<usize>,
}

impl PriorityQueue {
    /// An empty queue with room for `capacity` passengers before it grows.
    /// A zero capacity is replaced by the default of 10.
    pub fn new(side: QueueSide, capacity: usize) -> Self {
        let capacity = if capacity == 0 { DEFAULT_QUEUE_CAPACITY } else { capacity };
        Self {
            side,
            items: VecDeque::with_capacity(capacity),
            capacity,
            max_capacity: None,
        }
    }

    /// Refuse to grow past `max` entries.
    pub fn with_max_capacity(mut self, max: Option<usize>) -> Self {
        self.max_capacity = max;
        self
    }

    #[inline]
    pub fn side(&self) -> QueueSide {
        self.side
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity (doubles on overflow).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Queue `passenger` behind everyone of equal or higher priority.
    pub fn insert(&mut self, passenger: Passenger) -> QueueResult<()> {
        if self.items.len() >= self.capacity {
            self.grow().map_err(|capacity| QueueError::CapacityExhausted {
                passenger: passenger.id(),
                side:      self.side,
                capacity,
            })?;
        }
        let at = self.insertion_index(passenger.priority());
        self.items.insert(at, passenger);
        Ok(())
    }

    /// Remove the head: highest priority, longest queued among equals.
    #[inline]
    pub fn pop(&mut self) -> Option<Passenger> {
        self.items.pop_front()
    }

    /// Head of the queue without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&Passenger> {
        self.items.front()
    }

    /// Put a passenger just taken with [`pop`][Self::pop] back at the head.
    ///
    /// Never reallocates: the slot the pop freed is still reserved.
    pub fn restore_front(&mut self, passenger: Passenger) {
        debug_assert!(
            self.items.front().is_none_or(|head| head.priority() <= passenger.priority()),
            "restored passenger would jump a higher class"
        );
        self.items.push_front(passenger);
    }

    /// Add one minute to everyone waiting.
    pub fn tick_wait(&mut self) {
        for p in &mut self.items {
            p.tick_wait();
        }
    }

    /// `true` when any elder or wheelchair user is waiting.
    pub fn has_priority(&self) -> bool {
        // Priority passengers sort to the front, so the head decides.
        self.items.front().is_some_and(Passenger::is_priority)
    }

    /// Waiting passengers, head first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Passenger> + '_ {
        self.items.iter()
    }

    /// Owned copy of the waiting line, head first.
    pub fn snapshot(&self) -> Vec<Passenger> {
        self.items.iter().cloned().collect()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn insertion_index(&self, class: PriorityClass) -> usize {
        self.items
            .iter()
            .rposition(|p| p.priority() >= class)
            .map_or(0, |i| i + 1)
    }

    /// Double the logical capacity.  On failure returns the capacity that
    /// could not be exceeded.
    fn grow(&mut self) -> Result<(), usize> {
        let doubled = self.capacity.saturating_mul(2);
        let target = match self.max_capacity {
            Some(max) => doubled.min(max),
            None      => doubled,
        };
        if target <= self.capacity {
            return Err(self.capacity);
        }
        self.items
            .try_reserve_exact(target - self.items.len())
            .map_err(|_| self.capacity)?;
        self.capacity = target;
        Ok(())
    }
}
