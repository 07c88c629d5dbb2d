//! `OutputObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use lift_core::{LiftConfig, SimClock, Tick};
use lift_dispatch::{DispatchObserver, FleetSnapshot, LiftEvent, StepReport};

use crate::row::{ElevatorSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, SummaryStats};

/// A [`DispatchObserver`] that accumulates [`SummaryStats`] and writes step
/// summaries and elevator snapshots to any [`OutputWriter`].
///
/// Observer methods cannot fail, so the first writer error is stored and
/// retrieved with [`take_error`][Self::take_error] after the run.
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    stats:      SummaryStats,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W, config: &LiftConfig) -> Self {
        Self {
            writer,
            stats:      SummaryStats::new(config.max_wait_minutes),
            clock:      SimClock::new(config.start_minute_of_day),
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn stats(&self) -> &SummaryStats {
        &self.stats
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for OutputObserver<W> {
    fn on_step_start(&mut self, _tick: Tick, clock: &SimClock) {
        self.clock = *clock;
    }

    fn on_event(&mut self, _tick: Tick, event: &LiftEvent) {
        self.stats.record(event);
    }

    fn on_step_end(&mut self, tick: Tick, report: &StepReport) {
        let row = StepSummaryRow {
            tick:          tick.0,
            minute_of_day: self.clock.minute_of_day(),
            generated:     report.arrivals.queued + report.arrivals.dropped,
            dropped:       report.arrivals.dropped,
            boarded:       report.boarded,
            disembarked:   report.disembarked,
            hops:          report.hops,
            stops:         report.stops,
            energy:        report.energy,
            waiting:       report.waiting as u64,
            onboard:       report.onboard as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: FleetSnapshot<'_>) {
        let rows: Vec<ElevatorSnapshotRow> = fleet
            .elevators
            .iter()
            .map(|e| ElevatorSnapshotRow {
                tick:       tick.0,
                elevator:   e.id().0,
                floor:      e.floor().0,
                direction:  e.direction(),
                state:      e.state(),
                passengers: e.passenger_count() as u32,
                load_kg:    e.load_kg(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_elevator_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
