//! Simulation configuration.
//!
//! Supplied once at construction and never mutated afterwards.  Typically
//! built from `LiftConfig::default()` with a few overrides, or loaded from a
//! JSON file by the application crate (requires the `serde` feature).

use std::ops::Range;

use crate::{LiftError, LiftResult, PeakWindow, Tick};

/// Sub-queue capacity used when `queue_initial_capacity` is zero.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LiftConfig {
    // ── Building and fleet ────────────────────────────────────────────────
    /// Floors are numbered `0..num_floors`.
    pub num_floors: u16,
    pub num_elevators: u16,
    /// Maximum passengers aboard one elevator.
    pub passenger_capacity: u16,
    /// Maximum summed passenger weight aboard one elevator.
    pub weight_capacity_kg: u32,

    // ── Timing ────────────────────────────────────────────────────────────
    /// Per-hop travel time is drawn from `min_travel_secs..max_travel_secs`.
    pub min_travel_secs: u32,
    pub max_travel_secs: u32,
    /// Boardings that waited longer than this are counted as long waits.
    pub max_wait_minutes: u32,

    // ── Energy ────────────────────────────────────────────────────────────
    /// Energy charged for each single-floor hop.
    pub hop_energy: u32,
    /// Energy charged once per stop (board, disembark, or arrival dwell).
    pub stop_energy: u32,

    // ── Queues ────────────────────────────────────────────────────────────
    /// Starting storage for each floor sub-queue.  Zero means the default.
    pub queue_initial_capacity: usize,
    /// Hard ceiling for sub-queue growth.  `None` grows until allocation fails.
    pub queue_max_capacity: Option<usize>,

    // ── Arrivals ──────────────────────────────────────────────────────────
    pub arrivals_off_peak: u32,
    pub arrivals_peak: u32,
    pub age_range: Range<u32>,
    pub weight_range_kg: Range<u32>,
    pub wheelchair_probability: f64,
    pub peak_windows: Vec<PeakWindow>,

    // ── Run ───────────────────────────────────────────────────────────────
    /// Steps a full run simulates.  1440 = one day at one step per minute.
    pub total_steps: u64,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
    /// Minute of the day at which step 0 happens.
    pub start_minute_of_day: u32,
    /// Observer snapshot every N steps.  0 disables snapshots.
    pub output_interval_steps: u64,
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self {
            num_floors:             10,
            num_elevators:          2,
            passenger_capacity:     10,
            weight_capacity_kg:     1_000,
            min_travel_secs:        5,
            max_travel_secs:        10,
            max_wait_minutes:       30,
            hop_energy:             2,
            stop_energy:            1,
            queue_initial_capacity: 100,
            queue_max_capacity:     None,
            arrivals_off_peak:      1,
            arrivals_peak:          2,
            age_range:              10..80,
            weight_range_kg:        40..100,
            wheelchair_probability: 0.1,
            peak_windows:           PeakWindow::default_windows(),
            total_steps:            1_440,
            seed:                   42,
            start_minute_of_day:    0,
            output_interval_steps:  1,
        }
    }
}

impl LiftConfig {
    /// Index of the top floor.
    #[inline]
    pub fn top_floor(&self) -> u16 {
        self.num_floors.saturating_sub(1)
    }

    /// The tick at which a full run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }

    /// Initial sub-queue capacity with the zero fallback applied.
    #[inline]
    pub fn effective_queue_capacity(&self) -> usize {
        if self.queue_initial_capacity == 0 {
            DEFAULT_QUEUE_CAPACITY
        } else {
            self.queue_initial_capacity
        }
    }

    /// Check every value for internal consistency.
    pub fn validate(&self) -> LiftResult<()> {
        let fail = |msg: String| -> LiftResult<()> { Err(LiftError::Config(msg)) };

        if self.num_floors < 2 {
            return fail(format!("num_floors must be at least 2, got {}", self.num_floors));
        }
        if self.num_elevators == 0 {
            return fail("num_elevators must be at least 1".into());
        }
        if self.passenger_capacity == 0 {
            return fail("passenger_capacity must be at least 1".into());
        }
        if self.weight_capacity_kg == 0 {
            return fail("weight_capacity_kg must be positive".into());
        }
        if self.min_travel_secs > self.max_travel_secs {
            return fail(format!(
                "min_travel_secs {} exceeds max_travel_secs {}",
                self.min_travel_secs, self.max_travel_secs
            ));
        }
        if self.age_range.is_empty() || self.age_range.end > u8::MAX as u32 + 1 {
            return fail(format!("age_range {:?} is not a usable age span", self.age_range));
        }
        if self.weight_range_kg.is_empty()
            || self.weight_range_kg.start == 0
            || self.weight_range_kg.end > u16::MAX as u32 + 1
        {
            return fail(format!(
                "weight_range_kg {:?} must be non-empty and start above 0",
                self.weight_range_kg
            ));
        }
        // A rider heavier than the car can never board; an empty car would
        // keep selecting that floor.
        let heaviest = self.weight_range_kg.end - 1;
        if self.weight_capacity_kg < heaviest {
            return fail(format!(
                "weight_capacity_kg {} is below the heaviest generated passenger ({heaviest} kg)",
                self.weight_capacity_kg
            ));
        }
        if !(0.0..=1.0).contains(&self.wheelchair_probability) {
            return fail(format!(
                "wheelchair_probability {} is outside [0, 1]",
                self.wheelchair_probability
            ));
        }
        for w in &self.peak_windows {
            if w.start_hour > w.end_hour || w.end_hour >= 24 {
                return fail(format!("peak window {}-{} is not a valid hour span", w.start_hour, w.end_hour));
            }
        }
        if let Some(max) = self.queue_max_capacity {
            if max < self.effective_queue_capacity() {
                return fail(format!(
                    "queue_max_capacity {max} is below the initial capacity {}",
                    self.effective_queue_capacity()
                ));
            }
        }
        Ok(())
    }
}
