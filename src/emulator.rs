use crate::elevator::{ElevatorController, Statistics};
use crate::panel::{Buzzer, Clock, InputSource, Renderer, SpeedSelector};
use crossbeam_channel as cbc;
use log::info;
use std::time::Duration;

/**
 * Cooperative tick loop around the elevator core.
 *
 * Each `step` reads the clock, polls the panel for a new trip, reads the speed
 * switch, advances the controller, emits the tones that fell due and redraws
 * the displays if something changed. Nothing in a step blocks.
 *
 * # Fields
 * - `controller`:  The elevator core.
 * - `clock`:       Millisecond time source.
 * - `input`:       Call buttons and destination selector.
 * - `speed`:       Fast/slow speed switch.
 * - `renderer`:    Displays updated after every change.
 * - `buzzer`:      Feedback tone output.
 * - `tick`:        Idle time between two steps.
 */
pub struct Emulator<C: Clock, I: InputSource, S: SpeedSelector, R: Renderer, B: Buzzer> {
    controller: ElevatorController,
    clock: C,
    input: I,
    speed: S,
    renderer: R,
    buzzer: B,
    tick: Duration,
}

impl<C: Clock, I: InputSource, S: SpeedSelector, R: Renderer, B: Buzzer> Emulator<C, I, S, R, B> {
    pub fn new(
        controller: ElevatorController,
        clock: C,
        input: I,
        speed: S,
        renderer: R,
        buzzer: B,
        tick: Duration,
    ) -> Emulator<C, I, S, R, B> {
        Emulator {
            controller,
            clock,
            input,
            speed,
            renderer,
            buzzer,
            tick,
        }
    }

    /// Runs a single tick. Returns whether the displays were redrawn.
    pub fn step(&mut self) -> std::io::Result<bool> {
        let now = self.clock.now();
        let request = self.input.poll_request();
        let speed_interval = self.speed.current_speed_interval();

        let changed = self.controller.tick(now, speed_interval, request);

        for tone in self.controller.take_due_tones(now) {
            self.buzzer.emit_tone(tone);
        }

        if changed {
            self.renderer.render(&self.controller.status())?;
        }
        Ok(changed)
    }

    /// Steps until a message arrives on (or the sender of) `terminate_rx`.
    pub fn run(mut self, terminate_rx: cbc::Receiver<()>) -> std::io::Result<Statistics> {
        self.renderer.render(&self.controller.status())?;

        loop {
            cbc::select! {
                recv(terminate_rx) -> _ => {
                    info!("Emulator stopped");
                    return Ok(self.controller.statistics());
                }
                default(self.tick) => {
                    self.step()?;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &ElevatorController {
        &self.controller
    }
}
