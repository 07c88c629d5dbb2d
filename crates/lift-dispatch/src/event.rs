//! Events emitted by the dispatch engine.

use lift_core::{ElevatorId, Floor, PassengerId, PriorityClass};

/// Something observable that happened during a step.
///
/// The engine never aggregates these itself; statistics, logs, and
/// renderers build whatever they need from the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftEvent {
    /// A new passenger appeared at `origin`.
    PassengerGenerated {
        passenger:   PassengerId,
        origin:      Floor,
        destination: Floor,
        priority:    PriorityClass,
    },

    /// The origin queue could not take the passenger.  They are gone.
    PassengerDropped {
        passenger: PassengerId,
        floor:     Floor,
    },

    /// A passenger stepped in after waiting `wait_minutes`.
    PassengerBoarded {
        elevator:     ElevatorId,
        passenger:    PassengerId,
        floor:        Floor,
        wait_minutes: u32,
    },

    /// A passenger reached their destination.
    PassengerDisembarked {
        elevator:  ElevatorId,
        passenger: PassengerId,
        floor:     Floor,
    },

    /// One single-floor move.
    Hop {
        elevator:    ElevatorId,
        from:        Floor,
        to:          Floor,
        travel_secs: u32,
        energy:      u32,
    },

    /// One stop charge at `floor`.
    Stop {
        elevator: ElevatorId,
        floor:    Floor,
        energy:   u32,
    },
}

/// Receiver for [`LiftEvent`]s.
pub trait EventSink {
    fn emit(&mut self, event: LiftEvent);
}

impl EventSink for Vec<LiftEvent> {
    #[inline]
    fn emit(&mut self, event: LiftEvent) {
        self.push(event);
    }
}

/// Discards every event.
pub struct NoopSink;

impl EventSink for NoopSink {
    #[inline]
    fn emit(&mut self, _event: LiftEvent) {}
}
