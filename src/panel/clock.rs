use crate::panel::Clock;
use crate::shared::Timestamp;
use std::time::Instant;

/// Monotonic millisecond counter starting at zero. Readings wrap at
/// `u32::MAX` like the hardware tick counter they replace.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // Truncation is the wraparound
        Timestamp(self.start.elapsed().as_millis() as u32)
    }
}
