use lift_core::LiftError;
use lift_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] LiftError),

    #[error("{got} start floors supplied for a fleet of {expected}")]
    ElevatorCountMismatch { expected: usize, got: usize },

    #[error("floor {floor} is outside a {num_floors}-floor building")]
    FloorOutOfRange { floor: u16, num_floors: u16 },

    #[error(transparent)]
    Queue(#[from] QueueError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
