//! Observer trait for progress reporting and data collection.

use lift_core::{SimClock, Tick};
use lift_queue::FloorQueue;

use crate::{CallPanel, Elevator, LiftEvent, StepReport};

/// Read-only view of the whole building at a step boundary.
#[derive(Clone, Copy)]
pub struct FleetSnapshot<'a> {
    pub clock:     SimClock,
    pub elevators: &'a [Elevator],
    pub floors:    &'a [FloorQueue],
    pub panel:     &'a CallPanel,
}

impl FleetSnapshot<'_> {
    pub fn total_waiting(&self) -> usize {
        self.floors.iter().map(FloorQueue::total_waiting).sum()
    }

    pub fn total_onboard(&self) -> usize {
        self.elevators.iter().map(Elevator::passenger_count).sum()
    }
}

/// Callbacks invoked by [`FleetController::tick`][crate::FleetController::tick]
/// and the run loops built on it.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — energy printer
///
/// ```rust,ignore
/// struct EnergyPrinter;
///
/// impl DispatchObserver for EnergyPrinter {
///     fn on_step_end(&mut self, tick: Tick, report: &StepReport) {
///         println!("{tick}: {} energy units", report.energy);
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called at the very start of each step, before arrivals.
    fn on_step_start(&mut self, _tick: Tick, _clock: &SimClock) {}

    /// Called for every event, in the order it happened.
    fn on_event(&mut self, _tick: Tick, _event: &LiftEvent) {}

    /// Called after the call panel has been recomputed.
    fn on_step_end(&mut self, _tick: Tick, _report: &StepReport) {}

    /// Called at snapshot intervals (every `config.output_interval_steps`).
    fn on_snapshot(&mut self, _tick: Tick, _fleet: FleetSnapshot<'_>) {}

    /// Called once after the final step of [`run`][crate::FleetController::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
