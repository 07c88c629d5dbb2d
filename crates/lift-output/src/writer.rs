//! The `OutputWriter` trait implemented by backend writers.

use crate::{ElevatorSnapshotRow, OutputResult, StepSummaryRow};

/// Sink for per-step rows.
///
/// Errors are stored by [`OutputObserver`][crate::OutputObserver] and
/// retrieved with [`take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Write a batch of elevator snapshots.
    fn write_elevator_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
