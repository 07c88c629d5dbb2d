//! `lift-dispatch` — the dispatch engine.
//!
//! # One controller step
//!
//! ```text
//! tick():
//!   ① Arrivals — generate 1 passenger (2 at peak), queue each at its
//!                origin floor, light the matching call button.
//!   ② Wait     — every queued passenger waits one more minute.
//!   ③ Fleet    — each elevator, in fleet order:
//!                  disembark → board → move (one hop if loaded,
//!                  all the way to a chosen floor if empty).
//!   ④ Panel    — recompute every call button from queue occupancy.
//! ```
//!
//! Everything the statistics and rendering side needs is reported as
//! [`LiftEvent`]s through an [`EventSink`] or a [`DispatchObserver`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::LiftConfig;
//! use lift_dispatch::{FleetBuilder, NoopObserver};
//!
//! let mut fleet = FleetBuilder::new(LiftConfig::default()).build()?;
//! fleet.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod controller;
pub mod elevator;
pub mod error;
pub mod event;
pub mod observer;
pub mod panel;

#[cfg(test)]
mod tests;

pub use builder::FleetBuilder;
pub use controller::{Arrivals, FleetController, StepReport};
pub use elevator::{Elevator, ElevatorState, ElevatorStep, select_target};
pub use error::{DispatchError, DispatchResult};
pub use event::{EventSink, LiftEvent, NoopSink};
pub use observer::{DispatchObserver, FleetSnapshot, NoopObserver};
pub use panel::CallPanel;
