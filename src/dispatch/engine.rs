use crate::config::SimulationConfig;
use crate::dispatch::planner::{self, VisitPlan};
use crate::shared::{Building, Car, RunSummary, SimSnapshot};
use crossbeam_channel as cbc;
use log::{debug, info};
use std::time::Duration;

/**
 * Drives the elevator car through one run at a time.
 *
 * The `DispatchEngine` owns the building and the car and is the only component
 * that mutates them. A trigger on `start_rx` plans a route over the waiting
 * passengers, then the machine walks the plan stop by stop, boarding and
 * unloading at each floor, before returning the car to the home floor and
 * going idle again. Every state change is published on `snapshot_tx`.
 *
 * # Fields
 * - `start_rx`:        Receives run triggers; ignored while a run is active.
 * - `snapshot_tx`:     Publishes an observation after every state change.
 * - `run_done_tx`:     Reports the summary of each completed run.
 * - `terminate_rx`:    Shuts the engine down.
 * - `building`:        Floors and their waiting passengers.
 * - `car`:             Position, onboard passengers and the moving flag.
 * - `phase`:           Current phase of the run state machine.
 * - `visit_plan`:      Stops for the active run, ascending.
 * - `plan_cursor`:     Index of the next stop in `visit_plan`.
 * - `stops_made`:      Planned stops visited during the active run.
 * - `delivered`:       Passengers who reached their destination this run.
 * - `step_interval`:   Pacing between stops.
 *
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Moving,
    Resetting,
}

enum Event {
    StartRequested,
    TimerElapsed,
}

pub struct DispatchEngine {
    // Trigger and observation channels
    start_rx: cbc::Receiver<()>,
    snapshot_tx: cbc::Sender<SimSnapshot>,
    run_done_tx: cbc::Sender<RunSummary>,
    terminate_rx: cbc::Receiver<()>,

    // Private fields
    building: Building,
    car: Car,
    phase: Phase,
    visit_plan: VisitPlan,
    plan_cursor: usize,
    stops_made: u32,
    delivered: u32,
    step_interval: Duration,
}

impl DispatchEngine {
    pub fn new(
        config: &SimulationConfig,
        building: Building,
        start_rx: cbc::Receiver<()>,
        snapshot_tx: cbc::Sender<SimSnapshot>,
        run_done_tx: cbc::Sender<RunSummary>,
        terminate_rx: cbc::Receiver<()>,
    ) -> DispatchEngine {
        let car = Car::new(building.home_floor);
        DispatchEngine {
            start_rx,
            snapshot_tx,
            run_done_tx,
            terminate_rx,
            building,
            car,
            phase: Phase::Idle,
            visit_plan: Vec::new(),
            plan_cursor: 0,
            stops_made: 0,
            delivered: 0,
            step_interval: Duration::from_millis(config.step_interval_ms),
        }
    }

    pub fn run(mut self) {
        // The seeded building is visible before the first trigger
        self.publish_snapshot();

        // Main loop
        loop {
            cbc::select! {
                recv(self.start_rx) -> msg => {
                    match msg {
                        Ok(()) => self.handle_event(Event::StartRequested),
                        Err(_) => {
                            // Trigger side is gone, shut down
                            debug!("start channel closed, stopping engine");
                            break;
                        }
                    }
                }
                recv(self.terminate_rx) -> _ => {
                    break;
                }
                default(self.step_interval) => {
                    self.handle_event(Event::TimerElapsed);
                }
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::StartRequested => {
                let was_idle = self.phase == Phase::Idle;
                self.start();
                if was_idle {
                    self.publish_snapshot();
                }
            }
            Event::TimerElapsed => {
                if self.phase == Phase::Idle {
                    return;
                }
                let was_resetting = self.phase == Phase::Resetting;
                self.step();
                self.publish_snapshot();
                if was_resetting && self.phase == Phase::Idle {
                    let _ = self.run_done_tx.send(self.summary());
                }
            }
        }
    }

    /// Triggers a run. While a run is in progress this is a no-op.
    pub fn start(&mut self) {
        if self.car.moving {
            debug!("start ignored, run already in progress");
            return;
        }

        self.car.moving = true;
        self.visit_plan = planner::plan_route(&self.building);
        self.plan_cursor = 0;
        self.stops_made = 0;
        self.delivered = 0;

        // Nothing to visit: only the homeward step remains
        self.phase = if self.visit_plan.is_empty() {
            Phase::Resetting
        } else {
            Phase::Moving
        };

        info!("run started, visiting floors {:?}", self.visit_plan);
    }

    /// Advances the active run by one transition: visit the next planned
    /// stop, or return home and go idle. Idle is a fixed point.
    pub fn step(&mut self) {
        match self.phase {
            Phase::Idle => {}
            Phase::Moving => {
                let stop = self.visit_plan[self.plan_cursor];
                self.car.current_floor = stop;
                self.handle_passengers(stop);
                self.stops_made += 1;
                self.plan_cursor += 1;
                if self.plan_cursor >= self.visit_plan.len() {
                    self.phase = Phase::Resetting;
                }
            }
            Phase::Resetting => {
                let home = self.building.home_floor;
                self.car.current_floor = home;
                self.handle_passengers(home);
                self.visit_plan.clear();
                self.plan_cursor = 0;
                self.car.moving = false;
                self.phase = Phase::Idle;
                info!(
                    "run complete, {} stops, {} passengers delivered",
                    self.stops_made, self.delivered
                );
            }
        }
    }

    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot::capture(&self.car, &self.building)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visit_plan(&self) -> &[u8] {
        &self.visit_plan
    }

    /// Boards everyone waiting at `floor`, then lets every onboard passenger
    /// whose destination is `floor` leave. The order matters: a passenger
    /// riding to its own origin boards and leaves within the same stop.
    fn handle_passengers(&mut self, floor: u8) {
        let waiting = &mut self.building.floor_mut(floor).waiting;
        let boarded = waiting.len();
        self.car.onboard.append(waiting);

        let before = self.car.onboard.len();
        self.car
            .onboard
            .retain(|passenger| passenger.destination != floor);
        let alighted = before - self.car.onboard.len();
        self.delivered += alighted as u32;

        debug!(
            "stop at floor {}: {} boarded, {} left, {} onboard",
            floor,
            boarded,
            alighted,
            self.car.onboard.len()
        );
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            stops: self.stops_made,
            delivered: self.delivered,
        }
    }

    fn publish_snapshot(&self) {
        let _ = self.snapshot_tx.send(self.snapshot());
    }
}
