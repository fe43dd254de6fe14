/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Statistics;

/***************************************/
/*             Constants               */
/***************************************/
pub const N_FLOORS: u8 = 4;
pub const UNITS_PER_FLOOR: u8 = 4;

/***************************************/
/*       Public data structures        */
/***************************************/

/// One of the `N_FLOORS` levels. "No floor" is expressed as `Option::None`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct FloorIndex(u8);

impl FloorIndex {
    pub const GROUND: FloorIndex = FloorIndex(0);

    pub fn new(floor: u8) -> Option<FloorIndex> {
        if floor < N_FLOORS {
            Some(FloorIndex(floor))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = FloorIndex> {
        (0..N_FLOORS).map(FloorIndex)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FloorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Car position in animation units, `UNITS_PER_FLOOR` units per floor.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FinePosition(u8);

impl FinePosition {
    pub fn from_floor(floor: FloorIndex) -> FinePosition {
        FinePosition(floor.value() * UNITS_PER_FLOOR)
    }

    /// Floor index by integer division, so any unit between two floors
    /// reports the lower one.
    pub fn floor(&self) -> FloorIndex {
        FloorIndex(self.0 / UNITS_PER_FLOOR)
    }

    pub fn is_on_floor(&self) -> bool {
        self.0 % UNITS_PER_FLOOR == 0
    }

    pub fn step_toward(&self, target: FinePosition) -> FinePosition {
        if self.0 < target.0 {
            FinePosition(self.0 + 1)
        } else if self.0 > target.0 {
            FinePosition(self.0 - 1)
        } else {
            *self
        }
    }

    pub fn units(&self) -> u8 {
        self.0
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub origin: FloorIndex,
    pub destination: FloorIndex,
}

impl Trip {
    pub fn new(origin: FloorIndex, destination: FloorIndex) -> Trip {
        Trip {
            origin,
            destination,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.origin != self.destination
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Idle,
    MovingToOrigin,
    MovingToDestination,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoorPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Stationary,
}

impl Direction {
    pub fn between(position: FinePosition, target: FinePosition) -> Direction {
        if position < target {
            Direction::Up
        } else if position > target {
            Direction::Down
        } else {
            Direction::Stationary
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Stationary => "Stationary",
        };
        write!(f, "{}", text)
    }
}

/// Millisecond reading of a wrapping 32-bit tick counter.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Timestamp(pub u32);

impl Timestamp {
    pub fn elapsed_since(&self, earlier: Timestamp) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    #[cfg(test)]
    pub fn offset(&self, ms: u32) -> Timestamp {
        Timestamp(self.0.wrapping_add(ms))
    }

    // Deadlines further than half the counter range away are treated as past.
    pub fn has_reached(&self, deadline: Timestamp) -> bool {
        self.elapsed_since(deadline) < u32::MAX / 2
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

/// Snapshot handed to renderers after every observable change.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorStatus {
    pub position: FinePosition,
    pub floor: FloorIndex,
    pub target: FloorIndex,
    pub direction: Direction,
    pub stage: Stage,
    pub door_phase: DoorPhase,
    pub active_trip: Option<Trip>,
    pub waiting: Vec<u8>,
    pub waiting_destinations: Vec<Vec<FloorIndex>>,
    pub statistics: Statistics,
    pub queue_len: usize,
}
