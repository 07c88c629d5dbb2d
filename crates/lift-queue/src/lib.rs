//! `lift-queue` — where passengers wait.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`priority`]    | `PriorityQueue` — growable, stable, priority-ordered       |
//! | [`floor_queue`] | `FloorQueue` — one ascending and one descending queue      |
//! | [`error`]       | `QueueError`, `QueueResult<T>`                             |
//!
//! # Ordering contract
//!
//! Wheelchair users board first, then elders, then everyone else.  Within a
//! class, passengers leave in the order they arrived.

pub mod error;
pub mod floor_queue;
pub mod priority;


pub use error::{QueueError, QueueResult};
pub use floor_queue::FloorQueue;
pub use priority::PriorityQueue;
