//! Run-level statistics accumulated from [`LiftEvent`]s.

use std::fmt;

use lift_dispatch::LiftEvent;

/// Totals for a whole run.
///
/// Feed every event through [`record`][Self::record]; the counters then
/// agree with the controller's own bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStats {
    pub generated:         u64,
    pub dropped:           u64,
    pub boarded:           u64,
    pub disembarked:       u64,
    pub hops:              u64,
    pub stops:             u64,
    pub energy:            u64,
    pub total_wait:        u64,
    /// Boardings whose wait exceeded `max_wait_minutes`.
    pub long_waits:        u64,
    pub total_travel_secs: u64,
    pub max_wait_minutes:  u32,
}

impl SummaryStats {
    pub fn new(max_wait_minutes: u32) -> Self {
        Self { max_wait_minutes, ..Self::default() }
    }

    pub fn record(&mut self, event: &LiftEvent) {
        match *event {
            LiftEvent::PassengerGenerated { .. } => self.generated += 1,
            LiftEvent::PassengerDropped { .. } => self.dropped += 1,
            LiftEvent::PassengerBoarded { wait_minutes, .. } => {
                self.boarded += 1;
                self.total_wait += wait_minutes as u64;
                if wait_minutes > self.max_wait_minutes {
                    self.long_waits += 1;
                }
            }
            LiftEvent::PassengerDisembarked { .. } => self.disembarked += 1,
            LiftEvent::Hop { travel_secs, energy, .. } => {
                self.hops += 1;
                self.total_travel_secs += travel_secs as u64;
                self.energy += energy as u64;
            }
            LiftEvent::Stop { energy, .. } => {
                self.stops += 1;
                self.energy += energy as u64;
            }
        }
    }

    /// Mean boarding wait in minutes; `0.0` before anyone has boarded.
    pub fn mean_wait_minutes(&self) -> f64 {
        if self.boarded == 0 { 0.0 } else { self.total_wait as f64 / self.boarded as f64 }
    }

    /// Mean seconds per floor hop; `0.0` before any hop.
    pub fn mean_travel_secs(&self) -> f64 {
        if self.hops == 0 { 0.0 } else { self.total_travel_secs as f64 / self.hops as f64 }
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Run summary ===")?;
        writeln!(f, "passengers generated : {}", self.generated)?;
        writeln!(f, "passengers dropped   : {}", self.dropped)?;
        writeln!(f, "boardings            : {}", self.boarded)?;
        writeln!(f, "disembarkations      : {}", self.disembarked)?;
        writeln!(f, "floor hops           : {}", self.hops)?;
        writeln!(f, "stops                : {}", self.stops)?;
        writeln!(f, "energy used          : {} units", self.energy)?;
        writeln!(f, "mean wait            : {:.2} min", self.mean_wait_minutes())?;
        writeln!(f, "waits over {:>3} min   : {}", self.max_wait_minutes, self.long_waits)?;
        write!(f, "mean hop time        : {:.2} s", self.mean_travel_secs())
    }
}
