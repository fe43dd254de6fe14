/*
 * Collaborators of the elevator core: the clock, the push buttons and
 * switches, the displays and the buzzer. The core only sees the traits below;
 * the terminal implementations stand in for the physical panel.
 */
pub mod buzzer;
pub mod clock;
pub mod display;
pub mod keyboard;

pub mod display_tests;

pub use buzzer::TerminalBuzzer;
pub use clock::SystemClock;
pub use display::{JsonRenderer, TerminalRenderer};
pub use keyboard::{KeyboardDriver, PanelInput, SpeedSwitch};

use crate::shared::{ElevatorStatus, Timestamp, Tone, Trip};
use std::time::Duration;

/***************************************/
/*               Traits                */
/***************************************/
pub trait Clock {
    fn now(&self) -> Timestamp;
}

pub trait InputSource {
    /// A resolved trip request, or `None` when nothing was pressed this tick.
    fn poll_request(&mut self) -> Option<Trip>;
}

pub trait SpeedSelector {
    fn current_speed_interval(&mut self) -> Duration;
}

pub trait Renderer {
    fn render(&mut self, status: &ElevatorStatus) -> std::io::Result<()>;
}

pub trait Buzzer {
    fn emit_tone(&mut self, tone: Tone);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedPreset {
    Fast,
    Slow,
}
