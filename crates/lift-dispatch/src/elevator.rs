//! One elevator car and its per-step decision algorithm.
//!
//! # Step order
//!
//! 1. **Disembark** everyone whose destination is the current floor.
//! 2. **Board** from the current floor, ascending side first, until the car
//!    is full or the next passenger in line is too heavy (first-fit: a heavy
//!    head blocks lighter passengers behind it for this step).
//! 3. **Move**:
//!    - *empty* — pick a floor with [`select_target`] and travel there in
//!      one go, hop by hop, then charge one stop for the dwell;
//!    - *loaded* — re-derive the direction from onboard destinations and
//!      advance exactly one floor.
//!
//! A loaded car therefore re-decides every floor, while an empty car
//! commits to one destination for the whole approach.

use std::ops::Range;

use lift_core::{Direction, ElevatorId, Floor, LiftConfig, Passenger, QueueSide, RandomSource};
use lift_queue::FloorQueue;
use tracing::{debug, trace};

use crate::{EventSink, LiftEvent};

/// Coarse lifecycle state, derived from load and direction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ElevatorState {
    /// Empty and parked.
    Idle,
    /// Empty but heading somewhere (or just arrived there).
    EnRoute,
    /// At least one passenger aboard.
    Loaded,
}

impl ElevatorState {
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorState::Idle    => "idle",
            ElevatorState::EnRoute => "en_route",
            ElevatorState::Loaded  => "loaded",
        }
    }
}

/// What one elevator did during one step.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct ElevatorStep {
    pub disembarked: u32,
    pub boarded:     u32,
    pub hops:        u32,
    pub stops:       u32,
    /// Hop plus stop energy charged this step.
    pub energy:      u64,
}

#[derive(Clone, Debug)]
pub struct Elevator {
    id:              ElevatorId,
    floor:           Floor,
    direction:       Direction,
    passengers:      Vec<Passenger>,
    capacity:        u16,
    weight_limit_kg: u32,
    load_kg:         u32,
    hop_energy:      u32,
    stop_energy:     u32,
    travel_secs:     Range<u32>,
    last_step:       ElevatorStep,
}

impl Elevator {
    /// An empty, idle car parked at `floor`.
    pub fn new(id: ElevatorId, floor: Floor, config: &LiftConfig) -> Self {
        Self {
            id,
            floor,
            direction:       Direction::Idle,
            passengers:      Vec::with_capacity(config.passenger_capacity as usize),
            capacity:        config.passenger_capacity,
            weight_limit_kg: config.weight_capacity_kg,
            load_kg:         0,
            hop_energy:      config.hop_energy,
            stop_energy:     config.stop_energy,
            travel_secs:     config.min_travel_secs..config.max_travel_secs,
            last_step:       ElevatorStep::default(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> ElevatorState {
        if !self.passengers.is_empty() {
            ElevatorState::Loaded
        } else if self.direction.is_moving() {
            ElevatorState::EnRoute
        } else {
            ElevatorState::Idle
        }
    }

    /// Passengers aboard, in boarding order.
    #[inline]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn capacity(&self) -> u16 {
        self.capacity
    }

    #[inline]
    pub fn load_kg(&self) -> u32 {
        self.load_kg
    }

    #[inline]
    pub fn weight_limit_kg(&self) -> u32 {
        self.weight_limit_kg
    }

    /// Energy charged during the most recent step.
    #[inline]
    pub fn step_energy(&self) -> u64 {
        self.last_step.energy
    }

    /// Full record of the most recent step.
    #[inline]
    pub fn last_step(&self) -> ElevatorStep {
        self.last_step
    }

    // ── Step ──────────────────────────────────────────────────────────────

    /// Run one step against the building's floor queues.
    ///
    /// `floors` must be indexed by floor number and cover the whole building.
    pub fn step<R, S>(&mut self, floors: &mut [FloorQueue], rng: &mut R, sink: &mut S) -> ElevatorStep
    where
        R: RandomSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let mut report = ElevatorStep::default();

        report.disembarked = self.disembark(sink);
        if report.disembarked > 0 {
            self.charge_stop(&mut report, sink);
        }

        report.boarded = self.board(&mut floors[self.floor.index()], sink);
        if report.boarded > 0 {
            self.charge_stop(&mut report, sink);
        }

        if self.passengers.is_empty() {
            match select_target(self.floor, floors) {
                Some(target) => {
                    debug!(elevator = self.id.0, from = self.floor.0, to = target.0, "empty car dispatched");
                    while self.floor != target {
                        self.direction = Direction::toward(self.floor, target);
                        self.hop(rng, &mut report, sink);
                    }
                    self.charge_stop(&mut report, sink);
                }
                None => self.direction = Direction::Idle,
            }
        } else {
            self.update_direction();
            if self.direction.is_moving() {
                self.hop(rng, &mut report, sink);
            }
        }

        self.last_step = report;
        report
    }

    fn disembark<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> u32 {
        let floor = self.floor;
        let (leaving, staying): (Vec<Passenger>, Vec<Passenger>) =
            std::mem::take(&mut self.passengers)
                .into_iter()
                .partition(|p| p.destination() == floor);
        self.passengers = staying;

        for p in &leaving {
            self.load_kg -= p.weight_kg() as u32;
            debug!(elevator = self.id.0, floor = floor.0, passenger = %p.name(), "disembarked");
            sink.emit(LiftEvent::PassengerDisembarked {
                elevator:  self.id,
                passenger: p.id(),
                floor,
            });
        }
        leaving.len() as u32
    }

    fn board<S: EventSink + ?Sized>(&mut self, queue: &mut FloorQueue, sink: &mut S) -> u32 {
        let mut boarded = 0;
        while self.passengers.len() < self.capacity as usize && queue.has_waiting() {
            let Some(next) = queue
                .remove_highest_priority(QueueSide::Ascending)
                .or_else(|| queue.remove_highest_priority(QueueSide::Descending))
            else {
                break;
            };

            if self.load_kg.saturating_add(next.weight_kg() as u32) > self.weight_limit_kg {
                trace!(
                    elevator = self.id.0,
                    passenger = %next.name(),
                    load_kg = self.load_kg,
                    "too heavy, boarding halted for this step"
                );
                queue.restore_front(next);
                break;
            }

            self.load_kg += next.weight_kg() as u32;
            debug!(
                elevator = self.id.0,
                floor = self.floor.0,
                passenger = %next.name(),
                wait_minutes = next.wait_minutes(),
                "boarded"
            );
            sink.emit(LiftEvent::PassengerBoarded {
                elevator:     self.id,
                passenger:    next.id(),
                floor:        self.floor,
                wait_minutes: next.wait_minutes(),
            });
            self.passengers.push(next);
            boarded += 1;
        }
        boarded
    }

    /// Keep going while anyone aboard is still ahead; otherwise turn around
    /// if someone is behind, or stop.
    fn update_direction(&mut self) {
        let floor = self.floor;
        let above = self.passengers.iter().any(|p| p.destination() > floor);
        let below = self.passengers.iter().any(|p| p.destination() < floor);

        self.direction = match self.direction {
            Direction::Up if above   => Direction::Up,
            Direction::Down if below => Direction::Down,
            Direction::Up            => if below { Direction::Down } else { Direction::Idle },
            Direction::Down          => if above { Direction::Up } else { Direction::Idle },
            Direction::Idle => {
                if above {
                    Direction::Up
                } else if below {
                    Direction::Down
                } else {
                    Direction::Idle
                }
            }
        };
    }

    fn hop<R, S>(&mut self, rng: &mut R, report: &mut ElevatorStep, sink: &mut S)
    where
        R: RandomSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let from = self.floor;
        let to = match self.direction {
            Direction::Up   => from.up(),
            Direction::Down => from.down(),
            Direction::Idle => return,
        };
        let travel_secs = rng.gen_range_u32(self.travel_secs.clone());
        self.floor = to;
        report.hops += 1;
        report.energy += self.hop_energy as u64;
        trace!(elevator = self.id.0, from = from.0, to = to.0, travel_secs, "hop");
        sink.emit(LiftEvent::Hop {
            elevator: self.id,
            from,
            to,
            travel_secs,
            energy: self.hop_energy,
        });
    }

    fn charge_stop<S: EventSink + ?Sized>(&self, report: &mut ElevatorStep, sink: &mut S) {
        report.stops += 1;
        report.energy += self.stop_energy as u64;
        sink.emit(LiftEvent::Stop {
            elevator: self.id,
            floor:    self.floor,
            energy:   self.stop_energy,
        });
    }
}

// ── Target selection ──────────────────────────────────────────────────────────

/// Where an empty car at `current` should go next.
///
/// The nearest floor with an elder or wheelchair user waiting wins; failing
/// that, the nearest floor with anyone waiting.  Ties go to the lower floor.
/// `None` when the building is empty.
pub fn select_target(current: Floor, floors: &[FloorQueue]) -> Option<Floor> {
    nearest(current, floors, FloorQueue::has_priority_waiting)
        .or_else(|| nearest(current, floors, FloorQueue::has_waiting))
}

fn nearest(current: Floor, floors: &[FloorQueue], wanted: impl Fn(&FloorQueue) -> bool) -> Option<Floor> {
    // `min_by_key` keeps the first of equal keys, and floors are scanned
    // bottom-up.
    floors
        .iter()
        .filter(|q| wanted(*q))
        .min_by_key(|q| q.floor().distance(current))
        .map(FloorQueue::floor)
}
