//! Injectable randomness.
//!
//! Every random draw the simulator makes (passenger traits, origin and
//! destination floors, per-hop travel time) goes through [`RandomSource`].
//! Production runs use [`SimRng`], a seeded `SmallRng`, so the same seed
//! always produces the same day.  Tests use [`SequenceRng`] to script exact
//! values.

use std::collections::VecDeque;
use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The two primitives the simulator draws from.
pub trait RandomSource {
    /// A value uniformly in `range`.  An empty range returns `range.start`
    /// without consuming any randomness.
    fn gen_range_u32(&mut self, range: Range<u32>) -> u32;

    /// `true` with probability `p` (clamped to [0, 1]).
    fn gen_bool(&mut self, p: f64) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn gen_range_u32(&mut self, range: Range<u32>) -> u32 {
        (**self).gen_range_u32(range)
    }

    #[inline]
    fn gen_bool(&mut self, p: f64) -> bool {
        (**self).gen_bool(p)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Single-threaded by construction: the controller owns exactly one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn gen_range_u32(&mut self, range: Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        self.0.gen_range(range)
    }

    #[inline]
    fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SequenceRng ───────────────────────────────────────────────────────────────

/// Replays scripted values, cycling when a script runs out.
///
/// Each scripted integer `v` is mapped into the requested range as
/// `start + v % len`, so a script of raw offsets works for any range.
/// With an empty integer script every draw returns `range.start`; with an
/// empty bool script every draw returns `false`.
#[derive(Clone, Debug, Default)]
pub struct SequenceRng {
    values:  VecDeque<u32>,
    bools:   VecDeque<bool>,
}

impl SequenceRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self { values: values.into_iter().collect(), bools: VecDeque::new() }
    }

    /// Attach a script for `gen_bool` draws.
    pub fn with_bools(mut self, bools: impl IntoIterator<Item = bool>) -> Self {
        self.bools = bools.into_iter().collect();
        self
    }

    fn next_value(&mut self) -> u32 {
        match self.values.pop_front() {
            Some(v) => {
                self.values.push_back(v);
                v
            }
            None => 0,
        }
    }
}

impl RandomSource for SequenceRng {
    fn gen_range_u32(&mut self, range: Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        let len = range.end - range.start;
        range.start + self.next_value() % len
    }

    fn gen_bool(&mut self, _p: f64) -> bool {
        match self.bools.pop_front() {
            Some(b) => {
                self.bools.push_back(b);
                b
            }
            None => false,
        }
    }
}
