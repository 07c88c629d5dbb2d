//! `lift-core` — foundational types for the lift dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `ElevatorId`, `Floor`                  |
//! | [`direction`]   | `Direction` (elevator travel), `QueueSide`            |
//! | [`passenger`]   | `Passenger`, `PriorityClass`                          |
//! | [`config`]      | `LiftConfig`                                          |
//! | [`time`]        | `Tick`, `SimClock`, `PeakWindow`                      |
//! | [`rng`]         | `RandomSource`, `SimRng`, `SequenceRng`               |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::LiftConfig;
pub use direction::{Direction, QueueSide};
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, Floor, PassengerId};
pub use passenger::{Passenger, PriorityClass};
pub use rng::{RandomSource, SequenceRng, SimRng};
pub use time::{PeakWindow, SimClock, Tick};
