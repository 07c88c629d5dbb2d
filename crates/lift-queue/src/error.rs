use lift_core::{PassengerId, QueueSide};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// Storage was full and could not double.  The passenger was not queued.
    #[error("{side} queue cannot grow past {capacity} entries; {passenger} not queued")]
    CapacityExhausted {
        passenger: PassengerId,
        side:      QueueSide,
        capacity:  usize,
    },
}

pub type QueueResult<T> = Result<T, QueueError>;
