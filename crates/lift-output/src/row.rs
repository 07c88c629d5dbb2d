//! Plain data row types written by output backends.

use lift_core::Direction;
use lift_dispatch::ElevatorState;

/// Totals for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub tick:          u64,
    /// Minutes since midnight at the start of the step.
    pub minute_of_day: u32,
    pub generated:     u32,
    pub dropped:       u32,
    pub boarded:       u32,
    pub disembarked:   u32,
    pub hops:          u32,
    pub stops:         u32,
    pub energy:        u64,
    /// Passengers still queued after the step.
    pub waiting:       u64,
    pub onboard:       u64,
}

/// One elevator's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub tick:       u64,
    pub elevator:   u16,
    pub floor:      u16,
    pub direction:  Direction,
    pub state:      ElevatorState,
    pub passengers: u32,
    pub load_kg:    u32,
}
