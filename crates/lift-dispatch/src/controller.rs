//! The `FleetController` and its step loop.

use lift_core::{
    ElevatorId, Floor, LiftConfig, Passenger, PassengerId, QueueSide, RandomSource, SimClock,
    SimRng, Tick,
};
use lift_queue::FloorQueue;
use tracing::{debug, warn};

use crate::{
    CallPanel, DispatchError, DispatchObserver, DispatchResult, Elevator, EventSink,
    FleetSnapshot, LiftEvent,
};

// ── Reports ───────────────────────────────────────────────────────────────────

/// Outcome of one round of passenger generation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Arrivals {
    /// Passengers now waiting in a floor queue.
    pub queued:  u32,
    /// Passengers lost because their origin queue could not grow.
    pub dropped: u32,
}

/// Building-wide totals for one step.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct StepReport {
    pub arrivals:    Arrivals,
    pub boarded:     u32,
    pub disembarked: u32,
    pub hops:        u32,
    pub stops:       u32,
    /// Summed hop and stop energy across the fleet.
    pub energy:      u64,
    /// Passengers still queued at the end of the step.
    pub waiting:     usize,
    /// Passengers aboard any elevator at the end of the step.
    pub onboard:     usize,
}

// ── Event routing ─────────────────────────────────────────────────────────────

/// Forwards engine events to an observer, stamped with the current tick.
struct ObserverSink<'a, O: DispatchObserver + ?Sized> {
    tick:     Tick,
    observer: &'a mut O,
}

impl<O: DispatchObserver + ?Sized> EventSink for ObserverSink<'_, O> {
    #[inline]
    fn emit(&mut self, event: LiftEvent) {
        self.observer.on_event(self.tick, &event);
    }
}

// ── FleetController ───────────────────────────────────────────────────────────

/// Owns the elevators, the floor queues, and the call panel, and advances
/// them one step at a time.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].
pub struct FleetController<R: RandomSource = SimRng> {
    pub(crate) config:         LiftConfig,
    pub(crate) clock:          SimClock,
    pub(crate) elevators:      Vec<Elevator>,
    pub(crate) floors:         Vec<FloorQueue>,
    pub(crate) panel:          CallPanel,
    pub(crate) rng:            R,
    pub(crate) next_passenger: u32,
    pub(crate) generated:      u64,
    pub(crate) dropped:        u64,
    pub(crate) disembarked:    u64,
}

impl<R: RandomSource> FleetController<R> {
    // ── Run loops ─────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, then call
    /// `on_sim_end`.
    pub fn run<O: DispatchObserver + ?Sized>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.tick(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` steps from the current position (ignores `end_tick`).
    pub fn run_steps<O: DispatchObserver + ?Sized>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// One full minute: arrivals, then [`step_simulation`][Self::step_simulation],
    /// then the clock advances.
    pub fn tick<O: DispatchObserver + ?Sized>(&mut self, observer: &mut O) -> StepReport {
        let now = self.clock.current_tick;
        observer.on_step_start(now, &self.clock);

        let peak = self.clock.is_peak(&self.config.peak_windows);
        let mut sink = ObserverSink { tick: now, observer: &mut *observer };
        let arrivals = self.generate_passengers(peak, &mut sink);
        let mut report = self.step_simulation(&mut sink);
        report.arrivals = arrivals;

        observer.on_step_end(now, &report);
        let interval = self.config.output_interval_steps;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, self.snapshot());
        }

        self.clock.advance();
        report
    }

    // ── Core operations ───────────────────────────────────────────────────

    /// Create this step's passengers and queue them at their origin floors.
    ///
    /// `peak` comes from the caller's clock; the controller never classifies
    /// time itself.  A passenger whose queue cannot grow is dropped with a
    /// warning and a [`LiftEvent::PassengerDropped`].
    pub fn generate_passengers<S: EventSink + ?Sized>(&mut self, peak: bool, sink: &mut S) -> Arrivals {
        let count = if peak { self.config.arrivals_peak } else { self.config.arrivals_off_peak };
        let mut arrivals = Arrivals::default();

        for _ in 0..count {
            let passenger = self.new_passenger();
            let (id, origin) = (passenger.id(), passenger.origin());
            self.generated += 1;
            debug!(passenger = %passenger, "generated");
            sink.emit(LiftEvent::PassengerGenerated {
                passenger:   id,
                origin,
                destination: passenger.destination(),
                priority:    passenger.priority(),
            });

            match self.enqueue(passenger) {
                Ok(_) => arrivals.queued += 1,
                Err(e) => {
                    warn!(passenger = id.0, floor = origin.0, error = %e, "passenger dropped");
                    self.dropped += 1;
                    arrivals.dropped += 1;
                    sink.emit(LiftEvent::PassengerDropped { passenger: id, floor: origin });
                }
            }
        }
        arrivals
    }

    /// Queue an externally created passenger at their origin floor and
    /// light the matching call button.
    pub fn enqueue(&mut self, passenger: Passenger) -> DispatchResult<QueueSide> {
        let num_floors = self.config.num_floors;
        for floor in [passenger.origin(), passenger.destination()] {
            if floor.0 >= num_floors {
                return Err(DispatchError::FloorOutOfRange { floor: floor.0, num_floors });
            }
        }
        let origin = passenger.origin();
        let side = self.floors[origin.index()].insert(passenger)?;
        self.panel.press(origin, side);
        Ok(side)
    }

    /// Advance the building by one step without generating anyone:
    /// wait ticks, then every elevator in fleet order, then the call panel.
    pub fn step_simulation<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> StepReport {
        for queue in &mut self.floors {
            queue.tick_wait_time();
        }

        let mut report = StepReport::default();
        for elevator in &mut self.elevators {
            let step = elevator.step(&mut self.floors, &mut self.rng, sink);
            report.boarded += step.boarded;
            report.disembarked += step.disembarked;
            report.hops += step.hops;
            report.stops += step.stops;
            report.energy += step.energy;
        }
        self.disembarked += report.disembarked as u64;

        self.recompute_call_panel();

        report.waiting = self.total_waiting();
        report.onboard = self.total_onboard();
        report
    }

    /// Rewrite every call button from current queue occupancy.
    ///
    /// Idempotent: the panel is always a pure function of queue state.
    pub fn recompute_call_panel(&mut self) {
        for queue in &self.floors {
            for side in QueueSide::BOTH {
                self.panel.set(queue.floor(), side, !queue.is_empty(side));
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &LiftConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(id.index())
    }

    #[inline]
    pub fn floors(&self) -> &[FloorQueue] {
        &self.floors
    }

    pub fn floor_queue(&self, floor: Floor) -> Option<&FloorQueue> {
        self.floors.get(floor.index())
    }

    #[inline]
    pub fn panel(&self) -> &CallPanel {
        &self.panel
    }

    pub fn total_waiting(&self) -> usize {
        self.floors.iter().map(FloorQueue::total_waiting).sum()
    }

    pub fn total_onboard(&self) -> usize {
        self.elevators.iter().map(Elevator::passenger_count).sum()
    }

    /// Passengers created by [`generate_passengers`][Self::generate_passengers].
    #[inline]
    pub fn generated(&self) -> u64 {
        self.generated
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    #[inline]
    pub fn disembarked(&self) -> u64 {
        self.disembarked
    }

    /// Borrowed view of the building for renderers and writers.
    pub fn snapshot(&self) -> FleetSnapshot<'_> {
        FleetSnapshot {
            clock:     self.clock,
            elevators: &self.elevators,
            floors:    &self.floors,
            panel:     &self.panel,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Draw a passenger: origin, destination, age, wheelchair, weight.
    ///
    /// The destination is drawn from the other `num_floors - 1` floors, so it
    /// differs from the origin without retry loops.
    fn new_passenger(&mut self) -> Passenger {
        let n = self.config.num_floors as u32;
        let origin = self.rng.gen_range_u32(0..n);
        let mut destination = self.rng.gen_range_u32(0..n - 1);
        if destination >= origin {
            destination += 1;
        }
        let age = self.rng.gen_range_u32(self.config.age_range.clone());
        let wheelchair = self.rng.gen_bool(self.config.wheelchair_probability);
        let weight = self.rng.gen_range_u32(self.config.weight_range_kg.clone());

        let id = PassengerId(self.next_passenger);
        self.next_passenger += 1;
        Passenger::new(
            id,
            age as u8,
            wheelchair,
            weight as u16,
            Floor(origin as u16),
            Floor(destination as u16),
        )
    }
}
