//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_summaries.csv`
//! - `elevator_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputResult, StepSummaryRow};

pub const STEP_SUMMARY_HEADER: [&str; 11] = [
    "tick", "minute_of_day", "generated", "dropped", "boarded", "disembarked",
    "hops", "stops", "energy", "waiting", "onboard",
];

pub const ELEVATOR_SNAPSHOT_HEADER: [&str; 7] =
    ["tick", "elevator", "floor", "direction", "state", "passengers", "load_kg"];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(STEP_SUMMARY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        snapshots.write_record(ELEVATOR_SNAPSHOT_HEADER)?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self { summaries, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.minute_of_day.to_string(),
            row.generated.to_string(),
            row.dropped.to_string(),
            row.boarded.to_string(),
            row.disembarked.to_string(),
            row.hops.to_string(),
            row.stops.to_string(),
            row.energy.to_string(),
            row.waiting.to_string(),
            row.onboard.to_string(),
        ])?;
        Ok(())
    }

    fn write_elevator_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.elevator.to_string(),
                row.floor.to_string(),
                row.direction.as_str().to_owned(),
                row.state.as_str().to_owned(),
                row.passengers.to_string(),
                row.load_kg.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
