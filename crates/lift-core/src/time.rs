//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter; one tick is one
//! simulated minute and one controller step.  `SimClock` maps a tick to a
//! time of day:
//!
//!   minute_of_day = (start_minute_of_day + tick) mod 1440
//!
//! Peak classification lives here and not in the dispatcher: the
//! controller is only ever told whether the current minute is a peak one.

use std::fmt;

/// Minutes in one simulated day.
pub const MINUTES_PER_DAY: u64 = 1_440;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (minutes since the run started).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── PeakWindow ────────────────────────────────────────────────────────────────

/// A span of whole hours, both ends inclusive, during which arrivals double.
///
/// `PeakWindow::new(7, 9)` covers 07:00 through 09:59.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWindow {
    pub start_hour: u8,
    pub end_hour:   u8,
}

impl PeakWindow {
    pub const fn new(start_hour: u8, end_hour: u8) -> Self {
        Self { start_hour, end_hour }
    }

    #[inline]
    pub fn contains_hour(&self, hour: u8) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }

    /// Morning and evening rush: 07–09 and 17–19.
    pub fn default_windows() -> Vec<PeakWindow> {
        vec![PeakWindow::new(7, 9), PeakWindow::new(17, 19)]
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts tick counts into a time of day.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Minute of the day (0..1440) at which tick 0 happens.  Default: midnight.
    pub start_minute_of_day: u32,
    /// The current tick, advanced by `SimClock::advance()` each step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start_minute_of_day: u32) -> Self {
        Self {
            start_minute_of_day: start_minute_of_day % MINUTES_PER_DAY as u32,
            current_tick:        Tick::ZERO,
        }
    }

    /// Advance the clock by one minute.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Minutes since midnight of the current simulated day.
    #[inline]
    pub fn minute_of_day(&self) -> u32 {
        ((self.start_minute_of_day as u64 + self.current_tick.0) % MINUTES_PER_DAY) as u32
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        (self.minute_of_day() / 60) as u8
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        (self.minute_of_day() % 60) as u8
    }

    /// Whole simulated days elapsed since the clock's start time.
    #[inline]
    pub fn day(&self) -> u64 {
        (self.start_minute_of_day as u64 + self.current_tick.0) / MINUTES_PER_DAY
    }

    /// `true` when the current hour falls inside any of `windows`.
    pub fn is_peak(&self, windows: &[PeakWindow]) -> bool {
        let hour = self.hour();
        windows.iter().any(|w| w.contains_hour(hour))
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
