//! Unit and scenario tests for lift-dispatch.

use lift_core::{
    Direction, ElevatorId, Floor, LiftConfig, Passenger, PassengerId, QueueSide, SequenceRng,
};

use crate::{FleetBuilder, FleetController, LiftEvent, NoopSink};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(num_floors: u16, num_elevators: u16) -> LiftConfig {
    LiftConfig { num_floors, num_elevators, ..LiftConfig::default() }
}

/// Fleet with a scripted RNG that always draws the low end of every range.
fn fleet(cfg: LiftConfig, start: Vec<Floor>) -> FleetController<SequenceRng> {
    FleetBuilder::new(cfg)
        .rng(SequenceRng::new([0]))
        .start_floors(start)
        .build()
        .unwrap()
}

fn normal(id: u32, from: u16, to: u16, kg: u16) -> Passenger {
    Passenger::new(PassengerId(id), 30, false, kg, Floor(from), Floor(to))
}

fn wheelchair(id: u32, from: u16, to: u16) -> Passenger {
    Passenger::new(PassengerId(id), 30, true, 80, Floor(from), Floor(to))
}

fn elder(id: u32, from: u16, to: u16) -> Passenger {
    Passenger::new(PassengerId(id), 72, false, 65, Floor(from), Floor(to))
}

fn step(f: &mut FleetController<SequenceRng>) -> Vec<LiftEvent> {
    let mut events = Vec::new();
    f.step_simulation(&mut events);
    events
}

fn boarded_ids(events: &[LiftEvent]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            LiftEvent::PassengerBoarded { passenger, .. } => Some(passenger.0),
            _ => None,
        })
        .collect()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::DispatchError;

    #[test]
    fn builds_with_defaults() {
        let f = FleetBuilder::new(LiftConfig::default()).build().unwrap();
        assert_eq!(f.elevators().len(), 2);
        assert_eq!(f.floors().len(), 10);
        assert!(f.elevators().iter().all(|e| e.floor() == Floor::GROUND));
        assert_eq!(f.panel().lit_count(), 0);
    }

    #[test]
    fn start_floor_count_mismatch_errors() {
        let result = FleetBuilder::new(config(10, 2)).start_floors(vec![Floor(0)]).build();
        assert!(matches!(result, Err(DispatchError::ElevatorCountMismatch { expected: 2, got: 1 })));
    }

    #[test]
    fn start_floor_out_of_range_errors() {
        let result = FleetBuilder::new(config(5, 1)).start_floors(vec![Floor(5)]).build();
        assert!(matches!(result, Err(DispatchError::FloorOutOfRange { floor: 5, num_floors: 5 })));
    }

    #[test]
    fn invalid_config_errors() {
        let result = FleetBuilder::new(config(1, 1)).build();
        assert!(matches!(result, Err(DispatchError::Config(_))));
    }

    #[test]
    fn car_lighter_than_heaviest_rider_is_rejected() {
        let cfg = LiftConfig { weight_capacity_kg: 80, ..config(10, 1) };
        let result = FleetBuilder::new(cfg).build();
        assert!(matches!(result, Err(DispatchError::Config(_))));
    }

    #[test]
    fn start_floors_are_applied() {
        let f = fleet(config(10, 2), vec![Floor(3), Floor(9)]);
        assert_eq!(f.elevator(ElevatorId(0)).unwrap().floor(), Floor(3));
        assert_eq!(f.elevator(ElevatorId(1)).unwrap().floor(), Floor(9));
        assert!(f.elevator(ElevatorId(2)).is_none());
    }
}

// ── Call panel ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod panel_tests {
    use super::*;
    use crate::CallPanel;

    #[test]
    fn edge_floors_lack_a_button() {
        let mut panel = CallPanel::new(5);
        assert!(!panel.press(Floor(4), QueueSide::Ascending));
        assert!(!panel.press(Floor(0), QueueSide::Descending));
        assert!(!panel.is_pressed(Floor(4), QueueSide::Ascending));
        assert!(panel.press(Floor(0), QueueSide::Ascending));
        assert!(panel.press(Floor(4), QueueSide::Descending));
        assert_eq!(panel.lit_count(), 2);
    }

    #[test]
    fn out_of_range_is_a_noop() {
        let mut panel = CallPanel::new(5);
        assert!(!panel.press(Floor(9), QueueSide::Descending));
        assert!(!panel.clear(Floor(9), QueueSide::Descending));
        assert!(!panel.is_pressed(Floor(9), QueueSide::Descending));
        assert_eq!(panel.lit_count(), 0);
    }

    #[test]
    fn press_and_clear_report_transitions() {
        let mut panel = CallPanel::new(5);
        assert!(panel.press(Floor(2), QueueSide::Ascending));
        assert!(!panel.press(Floor(2), QueueSide::Ascending));
        assert!(panel.clear(Floor(2), QueueSide::Ascending));
        assert!(!panel.clear(Floor(2), QueueSide::Ascending));
    }

    #[test]
    fn whole_floor_operations() {
        let mut panel = CallPanel::new(5);
        panel.press_floor(Floor(0));
        panel.press_floor(Floor(2));
        assert_eq!(panel.lit_count(), 3);
        assert!(panel.is_floor_called(Floor(2)));
        panel.reset_floor(Floor(2));
        assert!(!panel.is_floor_called(Floor(2)));
        assert!(panel.is_floor_called(Floor(0)));
    }

    #[test]
    fn next_called_floor_looks_strictly_ahead() {
        let mut panel = CallPanel::new(10);
        panel.press(Floor(2), QueueSide::Ascending);
        panel.press(Floor(7), QueueSide::Descending);
        assert_eq!(panel.next_called_floor(Floor(2), Direction::Up), Some(Floor(7)));
        assert_eq!(panel.next_called_floor(Floor(7), Direction::Down), Some(Floor(2)));
        assert_eq!(panel.next_called_floor(Floor(7), Direction::Up), None);
        assert_eq!(panel.next_called_floor(Floor(5), Direction::Idle), None);
    }
}

// ── Target selection ──────────────────────────────────────────────────────────

#[cfg(test)]
mod target_tests {
    use super::*;
    use crate::select_target;

    #[test]
    fn none_when_building_empty() {
        let f = fleet(config(10, 1), vec![Floor(4)]);
        assert_eq!(select_target(Floor(4), f.floors()), None);
    }

    #[test]
    fn nearest_waiting_floor() {
        let mut f = fleet(config(10, 1), vec![Floor(0)]);
        f.enqueue(normal(1, 8, 2, 70)).unwrap();
        f.enqueue(normal(2, 6, 2, 70)).unwrap();
        assert_eq!(select_target(Floor(9), f.floors()), Some(Floor(8)));
        assert_eq!(select_target(Floor(0), f.floors()), Some(Floor(6)));
    }

    #[test]
    fn ties_go_to_lower_floor() {
        let mut f = fleet(config(10, 1), vec![Floor(0)]);
        f.enqueue(normal(1, 7, 2, 70)).unwrap();
        f.enqueue(normal(2, 3, 8, 70)).unwrap();
        assert_eq!(select_target(Floor(5), f.floors()), Some(Floor(3)));
    }

    #[test]
    fn priority_beats_distance() {
        let mut f = fleet(config(10, 1), vec![Floor(0)]);
        f.enqueue(normal(1, 1, 4, 70)).unwrap();
        f.enqueue(elder(2, 9, 0)).unwrap();
        assert_eq!(select_target(Floor(0), f.floors()), Some(Floor(9)));
    }
}

// ── Elevator behaviour ────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator_tests {
    use super::*;
    use crate::ElevatorState;

    /// Scenario A: one passenger 0 → 5, one empty car at 0, 10 floors.
    #[test]
    fn scenario_a_single_trip() {
        let mut f = fleet(config(10, 1), vec![Floor(0)]);

        // Nothing waiting: the car stays idle and charges nothing.
        let report = f.step_simulation(&mut NoopSink);
        assert_eq!(report.energy, 0);
        assert_eq!(f.elevators()[0].state(), ElevatorState::Idle);

        f.enqueue(normal(1, 0, 5, 70)).unwrap();
        assert!(f.panel().is_pressed(Floor(0), QueueSide::Ascending));

        // Step 1: board (one stop) and hop to floor 1.
        let events = step(&mut f);
        assert_eq!(boarded_ids(&events), vec![1]);
        assert!(events.contains(&LiftEvent::PassengerBoarded {
            elevator:     ElevatorId(0),
            passenger:    PassengerId(1),
            floor:        Floor(0),
            wait_minutes: 1,
        }));
        assert_eq!(events.iter().filter(|e| matches!(e, LiftEvent::Stop { .. })).count(), 1);
        let car = &f.elevators()[0];
        assert_eq!(car.floor(), Floor(1));
        assert_eq!(car.direction(), Direction::Up);
        assert_eq!(car.state(), ElevatorState::Loaded);
        assert_eq!(car.step_energy(), 1 + 2);
        assert!(!f.panel().is_pressed(Floor(0), QueueSide::Ascending));

        // Steps 2–5: one hop each.
        for _ in 0..4 {
            step(&mut f);
        }
        assert_eq!(f.elevators()[0].floor(), Floor(5));
        assert_eq!(f.disembarked(), 0);

        // Step 6: disembark (one stop), then idle.
        let events = step(&mut f);
        assert!(events.contains(&LiftEvent::PassengerDisembarked {
            elevator:  ElevatorId(0),
            passenger: PassengerId(1),
            floor:     Floor(5),
        }));
        assert!(events.contains(&LiftEvent::Stop { elevator: ElevatorId(0), floor: Floor(5), energy: 1 }));
        assert_eq!(f.disembarked(), 1);
        let car = &f.elevators()[0];
        assert_eq!(car.state(), ElevatorState::Idle);
        assert_eq!(car.load_kg(), 0);
    }

    /// Scenario B: a priority passenger pulls the car past a nearer call.
    #[test]
    fn scenario_b_priority_floor_first() {
        let mut f = fleet(config(10, 1), vec![Floor(0)]);
        f.enqueue(normal(1, 1, 4, 70)).unwrap();
        f.enqueue(wheelchair(2, 3, 8)).unwrap();
        f.enqueue(normal(3, 3, 1, 70)).unwrap();

        let events = step(&mut f);
        let hops: Vec<(Floor, Floor)> = events
            .iter()
            .filter_map(|e| match e {
                LiftEvent::Hop { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(hops, vec![(Floor(0), Floor(1)), (Floor(1), Floor(2)), (Floor(2), Floor(3))]);
        assert!(boarded_ids(&events).is_empty(), "floor 1 passenger must not be collected en route");
        let car = &f.elevators()[0];
        assert_eq!(car.floor(), Floor(3));
        assert_eq!(car.state(), ElevatorState::EnRoute);
        // Three hops plus the arrival dwell.
        assert_eq!(car.step_energy(), 3 * 2 + 1);

        // Next step: both floor-3 passengers board, wheelchair user first.
        let events = step(&mut f);
        assert_eq!(boarded_ids(&events), vec![2, 3]);
        assert_eq!(f.elevators()[0].direction(), Direction::Up);
        assert_eq!(f.elevators()[0].floor(), Floor(4));
    }

    /// Scenario C, count limit: a full car takes nobody else.
    #[test]
    fn scenario_c_passenger_capacity() {
        let cfg = LiftConfig { passenger_capacity: 2, ..config(10, 1) };
        let mut f = fleet(cfg, vec![Floor(0)]);
        for id in 1..=3 {
            f.enqueue(normal(id, 0, 6, 40)).unwrap();
        }
        let events = step(&mut f);
        assert_eq!(boarded_ids(&events), vec![1, 2]);
        let car = &f.elevators()[0];
        assert_eq!(car.passenger_count(), 2);
        assert!(car.load_kg() < car.weight_limit_kg());
        assert_eq!(f.floors()[0].count_waiting(QueueSide::Ascending), 1);
        assert!(f.panel().is_pressed(Floor(0), QueueSide::Ascending));
    }

    /// Scenario C, weight limit: a too-heavy head goes back to the front and
    /// blocks the lighter passenger behind it for this step.
    #[test]
    fn scenario_c_first_fit_weight() {
        let cfg = LiftConfig { weight_capacity_kg: 150, ..config(10, 1) };
        let mut f = fleet(cfg, vec![Floor(0)]);
        f.enqueue(normal(1, 0, 5, 100)).unwrap();
        f.enqueue(normal(2, 0, 5, 100)).unwrap();
        f.enqueue(normal(3, 0, 5, 40)).unwrap();

        let events = step(&mut f);
        assert_eq!(boarded_ids(&events), vec![1]);
        let car = &f.elevators()[0];
        assert_eq!(car.passenger_count(), 1);
        assert_eq!(car.load_kg(), 100);

        let left: Vec<u32> = f.floors()[0]
            .snapshot(QueueSide::Ascending)
            .iter()
            .map(|p| p.id().0)
            .collect();
        assert_eq!(left, vec![2, 3]);
    }

    /// Scenario D at the fleet level: a tiny initial queue grows and the
    /// car still boards in priority order.
    #[test]
    fn scenario_d_growth_keeps_boarding_order() {
        let cfg = LiftConfig { queue_initial_capacity: 1, ..config(10, 1) };
        let mut f = fleet(cfg, vec![Floor(0)]);
        f.enqueue(normal(1, 0, 4, 50)).unwrap();
        f.enqueue(elder(2, 0, 4)).unwrap();
        f.enqueue(normal(3, 0, 4, 50)).unwrap();
        f.enqueue(wheelchair(4, 0, 4)).unwrap();
        f.enqueue(elder(5, 0, 4)).unwrap();
        assert!(f.floors()[0].side(QueueSide::Ascending).capacity() >= 5);

        let events = step(&mut f);
        assert_eq!(boarded_ids(&events), vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn loaded_car_reverses_when_nobody_is_ahead() {
        let mut f = fleet(config(10, 1), vec![Floor(5)]);
        f.enqueue(normal(1, 5, 7, 70)).unwrap();
        f.enqueue(normal(2, 5, 2, 70)).unwrap();

        let events = step(&mut f); // board both, head up (ascending passenger first)
        assert_eq!(boarded_ids(&events), vec![1, 2]);
        assert_eq!(f.elevators()[0].floor(), Floor(6));
        step(&mut f); // 6 → 7
        step(&mut f); // drop passenger 1 at 7, turn around, 7 → 6
        let car = &f.elevators()[0];
        assert_eq!(car.direction(), Direction::Down);
        assert_eq!(car.floor(), Floor(6));
        assert_eq!(car.passenger_count(), 1);

        for _ in 0..4 {
            step(&mut f); // 6 → 2
        }
        assert_eq!(f.elevators()[0].floor(), Floor(2));
        step(&mut f);
        assert_eq!(f.disembarked(), 2);
    }

    #[test]
    fn boarding_prefers_ascending_side() {
        let mut f = fleet(config(10, 1), vec![Floor(4)]);
        f.enqueue(wheelchair(1, 4, 0)).unwrap();
        f.enqueue(normal(2, 4, 9, 70)).unwrap();
        let events = step(&mut f);
        assert_eq!(boarded_ids(&events), vec![2, 1]);
    }

    /// First-fit across sides: a too-heavy ascending head halts boarding
    /// before the descending side is tried.
    #[test]
    fn heavy_ascending_head_blocks_descending_side() {
        let cfg = LiftConfig { weight_capacity_kg: 100, ..config(10, 1) };
        let mut f = fleet(cfg, vec![Floor(4)]);
        f.enqueue(normal(1, 4, 9, 120)).unwrap();
        f.enqueue(normal(2, 4, 0, 40)).unwrap();

        let events = step(&mut f);
        assert!(boarded_ids(&events).is_empty());
        let car = &f.elevators()[0];
        assert_eq!(car.passenger_count(), 0);
        assert_eq!(car.load_kg(), 0);

        let floor = &f.floors()[4];
        let head: Vec<u32> = floor.snapshot(QueueSide::Ascending).iter().map(|p| p.id().0).collect();
        assert_eq!(head, vec![1]);
        assert_eq!(floor.count_waiting(QueueSide::Descending), 1);
    }

    #[test]
    fn large_energy_charges_accumulate_in_u64() {
        let cfg = LiftConfig { hop_energy: u32::MAX, stop_energy: u32::MAX, ..config(10, 1) };
        let mut f = fleet(cfg, vec![Floor(9)]);
        f.enqueue(normal(1, 0, 3, 70)).unwrap();

        // Nine hops down to floor 0, then the arrival stop.
        let report = f.step_simulation(&mut NoopSink);
        let expected = 10 * u32::MAX as u64;
        assert_eq!(f.elevators()[0].step_energy(), expected);
        assert_eq!(report.energy, expected);
    }

    #[test]
    fn wait_freezes_after_boarding() {
        let mut f = fleet(config(10, 1), vec![Floor(9)]);
        f.enqueue(normal(1, 0, 3, 70)).unwrap();
        // Empty car at 9 travels to 0 within the first step.
        step(&mut f);
        assert_eq!(f.elevators()[0].floor(), Floor(0));
        let events = step(&mut f);
        assert!(events.iter().any(|e| matches!(e, LiftEvent::PassengerBoarded { wait_minutes: 2, .. })));
        step(&mut f);
        step(&mut f);
        assert_eq!(f.elevators()[0].passengers()[0].wait_minutes(), 2);
    }

    #[test]
    fn hop_travel_time_comes_from_rng() {
        let mut f = FleetBuilder::new(config(10, 1))
            .rng(SequenceRng::new([3]))
            .build()
            .unwrap();
        f.enqueue(normal(1, 2, 5, 70)).unwrap();
        let events = step(&mut f);
        for e in &events {
            if let LiftEvent::Hop { travel_secs, energy, .. } = e {
                assert_eq!(*travel_secs, 5 + 3);
                assert_eq!(*energy, 2);
            }
        }
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod controller_tests {
    use lift_core::{PriorityClass, Tick};

    use super::*;
    use crate::{DispatchError, DispatchObserver, FleetSnapshot, NoopObserver, StepReport};

    #[test]
    fn generation_draws_traits_in_order() {
        // origin 3, destination 7 → skips origin → 8, age 10 + 65, weight 40 + 50.
        let mut f = FleetBuilder::new(config(10, 1))
            .rng(SequenceRng::new([3, 7, 65, 50]).with_bools([true]))
            .build()
            .unwrap();
        let mut events = Vec::new();
        let arrivals = f.generate_passengers(false, &mut events);
        assert_eq!(arrivals.queued, 1);
        assert_eq!(
            events[0],
            LiftEvent::PassengerGenerated {
                passenger:   PassengerId(1),
                origin:      Floor(3),
                destination: Floor(8),
                priority:    PriorityClass::Wheelchair,
            }
        );
        let queued = f.floors()[3].snapshot(QueueSide::Ascending);
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].age(), 75);
        assert_eq!(queued[0].weight_kg(), 90);
        assert_eq!(queued[0].name(), "P1");
        assert!(f.panel().is_pressed(Floor(3), QueueSide::Ascending));
    }

    #[test]
    fn peak_flag_doubles_arrivals() {
        let mut f = fleet(config(10, 1), vec![Floor(0)]);
        assert_eq!(f.generate_passengers(false, &mut NoopSink).queued, 1);
        assert_eq!(f.generate_passengers(true, &mut NoopSink).queued, 2);
        assert_eq!(f.generated(), 3);
    }

    #[test]
    fn tick_asks_the_clock_about_peak() {
        let cfg = LiftConfig { start_minute_of_day: 7 * 60, ..config(10, 1) };
        let mut f = fleet(cfg, vec![Floor(0)]);
        let report = f.tick(&mut NoopObserver);
        assert_eq!(report.arrivals.queued, 2);
        assert_eq!(f.clock().current_tick, Tick(1));
    }

    #[test]
    fn full_queue_drops_with_event() {
        let cfg = LiftConfig {
            queue_initial_capacity: 1,
            queue_max_capacity:     Some(1),
            arrivals_off_peak:      3,
            ..config(10, 1)
        };
        // Every draw is the range start: all three go 0 → 1.
        let mut f = FleetBuilder::new(cfg)
            .rng(SequenceRng::new([0]))
            .start_floors(vec![Floor(9)])
            .build()
            .unwrap();
        let mut events = Vec::new();
        let arrivals = f.generate_passengers(false, &mut events);
        assert_eq!(arrivals.queued, 1);
        assert_eq!(arrivals.dropped, 2);
        assert_eq!(f.dropped(), 2);
        let drops = events.iter().filter(|e| matches!(e, LiftEvent::PassengerDropped { .. })).count();
        assert_eq!(drops, 2);
        assert!(f.panel().is_pressed(Floor(0), QueueSide::Ascending));
    }

    #[test]
    fn enqueue_rejects_floors_outside_building() {
        let mut f = fleet(config(5, 1), vec![Floor(0)]);
        let result = f.enqueue(normal(1, 2, 7, 70));
        assert!(matches!(result, Err(DispatchError::FloorOutOfRange { floor: 7, .. })));
    }

    #[test]
    fn panel_recompute_is_idempotent() {
        let mut f = FleetBuilder::new(config(8, 2)).build().unwrap();
        f.run_steps(30, &mut NoopObserver);
        let before = f.panel().clone();
        f.recompute_call_panel();
        assert_eq!(&before, f.panel());
        f.recompute_call_panel();
        assert_eq!(&before, f.panel());
    }

    #[test]
    fn step_energy_sums_the_fleet() {
        let mut f = fleet(config(10, 2), vec![Floor(0), Floor(9)]);
        f.enqueue(normal(1, 0, 3, 70)).unwrap();
        f.enqueue(normal(2, 9, 6, 70)).unwrap();
        let report = f.step_simulation(&mut NoopSink);
        let per_car: u64 = f.elevators().iter().map(|e| e.step_energy()).sum();
        assert_eq!(report.energy, per_car);
        assert_eq!(report.boarded, 2);
        assert_eq!(report.hops, 2);
        assert_eq!(report.stops, 2);
    }

    /// Observer that counts callbacks.
    #[derive(Default)]
    struct Counter {
        starts:    usize,
        ends:      usize,
        events:    usize,
        snapshots: usize,
        finished:  Option<Tick>,
    }

    impl DispatchObserver for Counter {
        fn on_step_start(&mut self, _t: Tick, _c: &lift_core::SimClock) { self.starts += 1; }
        fn on_event(&mut self, _t: Tick, _e: &LiftEvent) { self.events += 1; }
        fn on_step_end(&mut self, _t: Tick, _r: &StepReport) { self.ends += 1; }
        fn on_snapshot(&mut self, _t: Tick, _f: FleetSnapshot<'_>) { self.snapshots += 1; }
        fn on_sim_end(&mut self, t: Tick) { self.finished = Some(t); }
    }

    #[test]
    fn run_drives_observer_to_end_tick() {
        let cfg = LiftConfig { total_steps: 12, output_interval_steps: 4, ..config(10, 2) };
        let mut f = FleetBuilder::new(cfg).build().unwrap();
        let mut obs = Counter::default();
        f.run(&mut obs);
        assert_eq!(obs.starts, 12);
        assert_eq!(obs.ends, 12);
        assert_eq!(obs.snapshots, 3); // ticks 0, 4, 8
        assert!(obs.events >= 12, "at least one generation event per step");
        assert_eq!(obs.finished, Some(Tick(12)));
        assert_eq!(f.clock().current_tick, Tick(12));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::NoopObserver;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Capacity, weight, conservation, and panel consistency hold at every
        /// step boundary.
        #[test]
        fn invariants_hold_every_step(
            seed in any::<u64>(),
            num_floors in 2u16..15,
            num_elevators in 1u16..4,
            passenger_capacity in 1u16..6,
            weight_capacity_kg in 100u32..400,
            start_minute in 0u32..1440,
        ) {
            let cfg = LiftConfig {
                num_floors,
                num_elevators,
                passenger_capacity,
                weight_capacity_kg,
                seed,
                start_minute_of_day: start_minute,
                ..LiftConfig::default()
            };
            let mut f = FleetBuilder::new(cfg).build().unwrap();

            for _ in 0..120 {
                f.tick(&mut NoopObserver);

                for car in f.elevators() {
                    prop_assert!(car.passenger_count() <= passenger_capacity as usize);
                    prop_assert!(car.load_kg() <= weight_capacity_kg);
                    let summed: u32 = car.passengers().iter().map(|p| p.weight_kg() as u32).sum();
                    prop_assert_eq!(summed, car.load_kg());
                }

                let accounted = f.total_waiting() as u64
                    + f.total_onboard() as u64
                    + f.disembarked()
                    + f.dropped();
                prop_assert_eq!(f.generated(), accounted);

                for q in f.floors() {
                    for side in QueueSide::BOTH {
                        if f.panel().has_button(q.floor(), side) {
                            prop_assert_eq!(f.panel().is_pressed(q.floor(), side), !q.is_empty(side));
                        }
                    }
                }
            }
        }
    }
}
