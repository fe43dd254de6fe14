use crate::config::{ElevatorConfig, FeedbackConfig};
use crate::elevator::doors::{DoorSequencer, ToneScheduler};
use crate::elevator::request_queue::RequestQueue;
use crate::elevator::statistics::Statistics;
use crate::shared::{
    Direction, DoorPhase, ElevatorStatus, FinePosition, FloorIndex, Stage, Timestamp, Tone, Trip,
};
use log::debug;
use std::time::Duration;

/**
 * Scheduling core of the single-car elevator.
 *
 * The `ElevatorController` owns the car position, the waiting trips, the door
 * sequence and the statistics. It is advanced by calling `tick` once per loop
 * iteration; every transition is level-triggered on the current state, so a
 * missed tick is simply caught up by the next one.
 *
 * One trip is served at a time: the car fetches the passenger at the trip's
 * origin, then drives them to the destination. Other trips wait in arrival
 * order and are never reordered.
 *
 * # Fields
 * - `queue`:                   Trips waiting to be served, oldest first.
 * - `door`:                    Door sequence started on every arrival.
 * - `tones`:                   Feedback tones waiting to be emitted.
 * - `statistics`:              Floors traversed with and without a passenger.
 * - `position`:                Car position in animation units.
 * - `target`:                  Floor the car is driving towards.
 * - `active_trip`:             Trip currently being fetched or carried.
 * - `stage`:                   Progress of `active_trip`.
 * - `last_floor`:              Floor index seen at the previous move, for crossing detection.
 * - `last_move`:               Time the movement interval last elapsed.
 * - `waiting_display_width`:   Cap on the waiting count reported per floor.
 * - `arrival_tone`:            Tone fired when the doors start opening.
 * - `accept_tone`:             Tone fired when a request is queued.
 */
pub struct ElevatorController {
    queue: RequestQueue,
    door: DoorSequencer,
    tones: ToneScheduler,
    statistics: Statistics,
    position: FinePosition,
    target: FloorIndex,
    active_trip: Option<Trip>,
    stage: Stage,
    last_floor: FloorIndex,
    last_move: Timestamp,
    waiting_display_width: u8,
    arrival_tone: Tone,
    accept_tone: Tone,
}

impl ElevatorController {
    pub fn new(
        config: &ElevatorConfig,
        feedback: &FeedbackConfig,
        now: Timestamp,
    ) -> ElevatorController {
        ElevatorController {
            queue: RequestQueue::new(config.queue_capacity),
            door: DoorSequencer::new(config),
            tones: ToneScheduler::new(),
            statistics: Statistics::new(),
            position: FinePosition::from_floor(FloorIndex::GROUND),
            target: FloorIndex::GROUND,
            active_trip: None,
            stage: Stage::Idle,
            last_floor: FloorIndex::GROUND,
            last_move: now,
            waiting_display_width: config.waiting_display_width,
            arrival_tone: Tone {
                frequency_hz: feedback.arrival_tone_hz,
                duration_ms: feedback.arrival_tone_ms,
            },
            accept_tone: Tone {
                frequency_hz: feedback.accept_tone_hz,
                duration_ms: feedback.accept_tone_ms,
            },
        }
    }

    /// Runs one pass of the control loop. Returns `true` if anything a
    /// renderer shows has changed.
    pub fn tick(&mut self, now: Timestamp, speed_interval: Duration, request: Option<Trip>) -> bool {
        let mut changed = false;

        // The door sequence owns the whole tick, including the one it ends on
        if self.door.is_active() {
            let previous_phase = self.door.phase();
            let phase = self.door.advance(now);
            if phase != previous_phase {
                debug!("Door {:?} at floor {}", phase, self.position.floor());
                changed = true;
            }
        } else {
            changed |= self.start_next_trip();
            changed |= self.check_arrival(now);

            // An arrival above may just have opened the doors
            if !self.door.is_active() {
                changed |= self.move_car(now, speed_interval);
            }
        }

        if let Some(trip) = request {
            changed |= self.request_trip(now, trip);
        }

        changed
    }

    /// Queues a trip and schedules the acknowledgement tone. Trips on a single
    /// floor and trips arriving while the queue is full are dropped.
    pub fn request_trip(&mut self, now: Timestamp, trip: Trip) -> bool {
        if self.queue.enqueue(trip) {
            debug!("Accepted trip {} ({} waiting)", trip, self.queue.len());
            self.tones.schedule(now, self.accept_tone);
            true
        } else if self.queue.is_full() {
            debug!("Discarded trip {}, queue holds {} trips", trip, self.queue.capacity());
            false
        } else {
            debug!("Discarded trip {}", trip);
            false
        }
    }

    pub fn take_due_tones(&mut self, now: Timestamp) -> Vec<Tone> {
        self.tones.take_due(now)
    }

    pub fn status(&self) -> ElevatorStatus {
        let waiting_destinations = FloorIndex::all()
            .map(|floor| self.queue.destinations_waiting_at(floor))
            .collect();

        ElevatorStatus {
            position: self.position(),
            floor: self.position.floor(),
            target: self.target(),
            direction: self.direction(),
            stage: self.stage(),
            door_phase: self.door_phase(),
            active_trip: self.active_trip(),
            waiting: self
                .queue()
                .peek_counts_by_floor(self.waiting_display_width)
                .to_vec(),
            waiting_destinations,
            statistics: self.statistics(),
            queue_len: self.queue().len(),
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.position, FinePosition::from_floor(self.target))
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn position(&self) -> FinePosition {
        self.position
    }

    pub fn target(&self) -> FloorIndex {
        self.target
    }

    pub fn active_trip(&self) -> Option<Trip> {
        self.active_trip
    }

    pub fn door_phase(&self) -> DoorPhase {
        self.door.phase()
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    fn start_next_trip(&mut self) -> bool {
        if self.stage != Stage::Idle || self.queue.is_empty() {
            return false;
        }

        match self.queue.dequeue() {
            Some(trip) => {
                debug!("Fetching passenger at floor {} for floor {}", trip.origin, trip.destination);
                self.active_trip = Some(trip);
                self.target = trip.origin;
                self.stage = Stage::MovingToOrigin;
                true
            }
            None => false,
        }
    }

    fn check_arrival(&mut self, now: Timestamp) -> bool {
        if self.stage == Stage::Idle || self.position != FinePosition::from_floor(self.target) {
            return false;
        }

        debug_assert!(self.position.is_on_floor(), "doors opened between floors");
        self.door.start(now);
        self.tones.schedule(now, self.arrival_tone);

        match self.stage {
            Stage::MovingToOrigin => {
                if let Some(trip) = self.active_trip {
                    debug!("Picked up passenger at floor {}", trip.origin);
                    self.target = trip.destination;
                }
                self.stage = Stage::MovingToDestination;
            }
            Stage::MovingToDestination => {
                debug!("Dropped off passenger at floor {}", self.target);
                self.active_trip = None;
                self.stage = Stage::Idle;
            }
            Stage::Idle => (),
        }

        true
    }

    fn move_car(&mut self, now: Timestamp, speed_interval: Duration) -> bool {
        let interval_ms = u32::try_from(speed_interval.as_millis()).unwrap_or(u32::MAX);
        if now.elapsed_since(self.last_move) <= interval_ms {
            return false;
        }
        self.last_move = now;

        let target = FinePosition::from_floor(self.target);
        if self.position == target {
            return false;
        }

        debug_assert!(!self.door.is_active(), "car moved while the doors were active");
        self.position = self.position.step_toward(target);

        let floor = self.position.floor();
        if floor != self.last_floor {
            let aboard = self.passenger_aboard();
            self.statistics.record_floor_crossing(aboard);
            debug!(
                "Crossed from floor {} to {} ({})",
                self.last_floor,
                floor,
                if aboard { "with passenger" } else { "empty" }
            );
            self.last_floor = floor;
        }

        true
    }

    // A summoned passenger only counts once they are in the car.
    fn passenger_aboard(&self) -> bool {
        self.active_trip.is_some() && self.stage == Stage::MovingToDestination
    }
}
