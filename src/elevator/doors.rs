/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::shared::{DoorPhase, Timestamp, Tone};

/**
 * Timed door sequence started when the car arrives at its target floor.
 *
 * The phase is a pure function of the time elapsed since `start`:
 * `Opening` until `open_after_ms`, `Open` until `closing_after_ms`,
 * `Closing` until `closed_after_ms`, then `Closed` and inactive.
 *
 * # Fields
 * - `phase`:               Phase computed by the last `start`/`advance`.
 * - `started_at`:          Start of the running sequence, `None` when closed.
 * - `open_after_ms`:       End of the `Opening` phase.
 * - `closing_after_ms`:    End of the `Open` phase.
 * - `closed_after_ms`:     End of the `Closing` phase.
 */
#[derive(Debug, Clone)]
pub struct DoorSequencer {
    phase: DoorPhase,
    started_at: Option<Timestamp>,
    open_after_ms: u32,
    closing_after_ms: u32,
    closed_after_ms: u32,
}

impl DoorSequencer {
    pub fn new(config: &ElevatorConfig) -> DoorSequencer {
        DoorSequencer {
            phase: DoorPhase::Closed,
            started_at: None,
            open_after_ms: config.door_open_after_ms,
            closing_after_ms: config.door_closing_after_ms,
            closed_after_ms: config.door_closed_after_ms,
        }
    }

    pub fn start(&mut self, now: Timestamp) {
        self.started_at = Some(now);
        self.phase = DoorPhase::Opening;
    }

    pub fn advance(&mut self, now: Timestamp) -> DoorPhase {
        if let Some(started_at) = self.started_at {
            self.phase = self.phase_after(now.elapsed_since(started_at));
            if self.phase == DoorPhase::Closed {
                self.started_at = None;
            }
        }
        self.phase
    }

    pub fn phase(&self) -> DoorPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != DoorPhase::Closed
    }

    fn phase_after(&self, elapsed_ms: u32) -> DoorPhase {
        if elapsed_ms < self.open_after_ms {
            DoorPhase::Opening
        } else if elapsed_ms < self.closing_after_ms {
            DoorPhase::Open
        } else if elapsed_ms < self.closed_after_ms {
            DoorPhase::Closing
        } else {
            DoorPhase::Closed
        }
    }
}

/// One-shot feedback tones waiting for their due time. Polled by the tick
/// loop so that no tone ever blocks it.
#[derive(Debug, Clone, Default)]
pub struct ToneScheduler {
    pending: VecDeque<(Timestamp, Tone)>,
}

impl ToneScheduler {
    pub fn new() -> ToneScheduler {
        ToneScheduler::default()
    }

    pub fn schedule(&mut self, at: Timestamp, tone: Tone) {
        self.pending.push_back((at, tone));
    }

    pub fn take_due(&mut self, now: Timestamp) -> Vec<Tone> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut due = Vec::new();
        let mut waiting = VecDeque::with_capacity(self.pending.len());
        while let Some((at, tone)) = self.pending.pop_front() {
            if now.has_reached(at) {
                due.push(tone);
            } else {
                waiting.push_back((at, tone));
            }
        }
        self.pending = waiting;
        due
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
