use serde::Serialize;

/**
 * Floors traversed by the car, split by whether a passenger was on board.
 *
 * Both counters only ever grow. The controller calls `record_floor_crossing`
 * once per change of floor index, never once per animation step.
 */
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    floors_with_passenger: u32,
    floors_without_passenger: u32,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn record_floor_crossing(&mut self, aboard: bool) {
        if aboard {
            self.floors_with_passenger = self.floors_with_passenger.saturating_add(1);
        } else {
            self.floors_without_passenger = self.floors_without_passenger.saturating_add(1);
        }
    }

    pub fn floors_with_passenger(&self) -> u32 {
        self.floors_with_passenger
    }

    pub fn floors_without_passenger(&self) -> u32 {
        self.floors_without_passenger
    }
}
