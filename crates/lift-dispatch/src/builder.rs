//! Fluent builder for constructing a [`FleetController`].

use lift_core::{ElevatorId, Floor, LiftConfig, RandomSource, SimClock, SimRng};
use lift_queue::FloorQueue;

use crate::{CallPanel, DispatchError, DispatchResult, Elevator, FleetController};

/// Fluent builder for [`FleetController<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                        |
/// |---------------------|--------------------------------|
/// | `.rng(r)`           | `SimRng::new(config.seed)`     |
/// | `.start_floors(v)`  | every elevator on floor 0      |
///
/// # Example
///
/// ```rust,ignore
/// let mut fleet = FleetBuilder::new(config)
///     .rng(SequenceRng::new([0, 4, 20, 30]))
///     .start_floors(vec![Floor(0), Floor(9)])
///     .build()?;
/// ```
pub struct FleetBuilder<R: RandomSource = SimRng> {
    config:       LiftConfig,
    rng:          R,
    start_floors: Option<Vec<Floor>>,
}

impl FleetBuilder<SimRng> {
    /// Create a builder seeded from `config.seed`.
    pub fn new(config: LiftConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, rng, start_floors: None }
    }
}

impl<R: RandomSource> FleetBuilder<R> {
    /// Replace the random source (e.g. with a scripted one in tests).
    pub fn rng<R2: RandomSource>(self, rng: R2) -> FleetBuilder<R2> {
        FleetBuilder {
            config:       self.config,
            rng,
            start_floors: self.start_floors,
        }
    }

    /// Where each elevator starts.  Must be length `num_elevators`.
    pub fn start_floors(mut self, floors: Vec<Floor>) -> Self {
        self.start_floors = Some(floors);
        self
    }

    /// Validate inputs, build the queues, elevators, and panel, and return a
    /// ready-to-run [`FleetController`].
    pub fn build(self) -> DispatchResult<FleetController<R>> {
        self.config.validate()?;
        let config = self.config;
        let fleet_size = config.num_elevators as usize;

        let start_floors = match self.start_floors {
            Some(v) => {
                if v.len() != fleet_size {
                    return Err(DispatchError::ElevatorCountMismatch {
                        expected: fleet_size,
                        got:      v.len(),
                    });
                }
                if let Some(bad) = v.iter().find(|f| f.0 >= config.num_floors) {
                    return Err(DispatchError::FloorOutOfRange {
                        floor:      bad.0,
                        num_floors: config.num_floors,
                    });
                }
                v
            }
            None => vec![Floor::GROUND; fleet_size],
        };

        let elevators = start_floors
            .into_iter()
            .enumerate()
            .map(|(i, floor)| Elevator::new(ElevatorId(i as u16), floor, &config))
            .collect();

        let capacity = config.effective_queue_capacity();
        let floors = (0..config.num_floors)
            .map(|f| FloorQueue::new(Floor(f), capacity).with_max_capacity(config.queue_max_capacity))
            .collect();

        Ok(FleetController {
            clock:          SimClock::new(config.start_minute_of_day),
            panel:          CallPanel::new(config.num_floors),
            elevators,
            floors,
            rng:            self.rng,
            next_passenger: 1,
            generated:      0,
            dropped:        0,
            disembarked:    0,
            config,
        })
    }
}
