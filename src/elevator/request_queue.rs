/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{FloorIndex, Trip, N_FLOORS};

/**
 * Bounded FIFO of passenger trips waiting to be served.
 *
 * Trips leave the queue in exactly the order they arrived. When the queue is
 * full, or a trip starts and ends on the same floor, `enqueue` is a no-op that
 * returns `false`.
 *
 * # Fields
 * - `trips`:       Ring buffer holding the waiting trips, head first.
 * - `capacity`:    Maximum number of waiting trips.
 */
#[derive(Debug, Clone)]
pub struct RequestQueue {
    trips: VecDeque<Trip>,
    capacity: usize,
}

impl RequestQueue {
    pub fn new(capacity: usize) -> RequestQueue {
        RequestQueue {
            trips: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn enqueue(&mut self, trip: Trip) -> bool {
        if !trip.is_valid() || self.is_full() {
            return false;
        }
        self.trips.push_back(trip);
        true
    }

    pub fn dequeue(&mut self) -> Option<Trip> {
        self.trips.pop_front()
    }

    /// Waiting passengers per origin floor, each count capped at `display_width`.
    pub fn peek_counts_by_floor(&self, display_width: u8) -> [u8; N_FLOORS as usize] {
        let mut counts = [0u8; N_FLOORS as usize];
        for trip in self.trips.iter() {
            let count = &mut counts[trip.origin.as_usize()];
            if *count < display_width {
                *count += 1;
            }
        }
        counts
    }

    /// Destinations of the passengers waiting on `floor`, oldest first.
    pub fn destinations_waiting_at(&self, floor: FloorIndex) -> Vec<FloorIndex> {
        self.iter()
            .filter(|trip| trip.origin == floor)
            .map(|trip| trip.destination)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.trips.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
