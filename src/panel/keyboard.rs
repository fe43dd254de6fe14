use crate::config::SpeedConfig;
use crate::panel::{InputSource, SpeedPreset, SpeedSelector};
use crate::shared::{FloorIndex, Trip};
use crossbeam_channel as cbc;
use log::{debug, error, info, warn};
use std::io::BufRead;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Call(FloorIndex),
    Destination(FloorIndex),
    Speed(SpeedPreset),
    Quit,
}

/**
 * # Keyboard Driver
 * Reads panel commands from a terminal and publishes them on channels.
 *
 * This is the software stand-in for the call buttons, the destination switches
 * and the speed switch. It runs on its own thread and blocks on the reader;
 * the tick loop only ever drains the channels.
 *
 * Commands, one per line:
 * - `0`..`3`:      Call the elevator from that floor.
 * - `d0`..`d3`:    Set the destination selector.
 * - `f` / `s`:     Flip the speed switch to fast / slow.
 * - `q`:           Quit.
 *
 * # Fields
 * - `reader`:                  Line source, usually stdin.
 * - `floor_call_tx`:           Sender for floor call button presses.
 * - `destination_switch_tx`:   Sender for destination selector changes.
 * - `speed_switch_tx`:         Sender for speed switch changes.
 * - `terminate_tx`:            Sender used to stop the tick loop.
 */
pub struct KeyboardDriver<R: BufRead> {
    reader: R,
    floor_call_tx: cbc::Sender<FloorIndex>,
    destination_switch_tx: cbc::Sender<FloorIndex>,
    speed_switch_tx: cbc::Sender<SpeedPreset>,
    terminate_tx: cbc::Sender<()>,
}

impl<R: BufRead> KeyboardDriver<R> {
    pub fn new(
        reader: R,
        floor_call_tx: cbc::Sender<FloorIndex>,
        destination_switch_tx: cbc::Sender<FloorIndex>,
        speed_switch_tx: cbc::Sender<SpeedPreset>,
        terminate_tx: cbc::Sender<()>,
    ) -> KeyboardDriver<R> {
        KeyboardDriver {
            reader,
            floor_call_tx,
            destination_switch_tx,
            speed_switch_tx,
            terminate_tx,
        }
    }

    pub fn run(mut self) {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    debug!("Keyboard input closed");
                    return;
                }
                Ok(_) => {
                    if !self.handle_line(&line) {
                        return;
                    }
                }
                Err(e) => {
                    error!("Error reading keyboard input: {}", e);
                    return;
                }
            }
        }
    }

    // Returns false once the driver should stop
    fn handle_line(&self, line: &str) -> bool {
        let command = match parse_command(line) {
            Some(command) => command,
            None => {
                if !line.trim().is_empty() {
                    warn!("Unknown command {:?}", line.trim());
                }
                return true;
            }
        };

        let sent = match command {
            KeyCommand::Call(floor) => self.floor_call_tx.send(floor).is_ok(),
            KeyCommand::Destination(floor) => self.destination_switch_tx.send(floor).is_ok(),
            KeyCommand::Speed(preset) => self.speed_switch_tx.send(preset).is_ok(),
            KeyCommand::Quit => {
                info!("Quit requested");
                let _ = self.terminate_tx.send(());
                return false;
            }
        };

        if !sent {
            debug!("Tick loop is gone, stopping keyboard driver");
        }
        sent
    }
}

pub fn parse_command(line: &str) -> Option<KeyCommand> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "f" => Some(KeyCommand::Speed(SpeedPreset::Fast)),
        "s" => Some(KeyCommand::Speed(SpeedPreset::Slow)),
        "q" => Some(KeyCommand::Quit),
        _ => {
            if let Some(rest) = line.strip_prefix('d') {
                parse_floor(rest).map(KeyCommand::Destination)
            } else {
                parse_floor(&line).map(KeyCommand::Call)
            }
        }
    }
}

fn parse_floor(text: &str) -> Option<FloorIndex> {
    text.parse::<u8>().ok().and_then(FloorIndex::new)
}

/// Turns floor calls into trips using the last destination selector value.
/// At most one call is taken per poll.
pub struct PanelInput {
    floor_call_rx: cbc::Receiver<FloorIndex>,
    destination_switch_rx: cbc::Receiver<FloorIndex>,
    destination: FloorIndex,
}

impl PanelInput {
    pub fn new(
        floor_call_rx: cbc::Receiver<FloorIndex>,
        destination_switch_rx: cbc::Receiver<FloorIndex>,
    ) -> PanelInput {
        PanelInput {
            floor_call_rx,
            destination_switch_rx,
            destination: FloorIndex::GROUND,
        }
    }

    #[cfg(test)]
    pub fn destination(&self) -> FloorIndex {
        self.destination
    }
}

impl InputSource for PanelInput {
    fn poll_request(&mut self) -> Option<Trip> {
        if let Some(destination) = self.destination_switch_rx.try_iter().last() {
            debug!("Destination selector set to floor {}", destination);
            self.destination = destination;
        }

        self.floor_call_rx
            .try_recv()
            .ok()
            .map(|origin| Trip::new(origin, self.destination))
    }
}

pub struct SpeedSwitch {
    speed_switch_rx: cbc::Receiver<SpeedPreset>,
    preset: SpeedPreset,
    fast: Duration,
    slow: Duration,
}

impl SpeedSwitch {
    pub fn new(
        config: &SpeedConfig,
        initial: SpeedPreset,
        speed_switch_rx: cbc::Receiver<SpeedPreset>,
    ) -> SpeedSwitch {
        SpeedSwitch {
            speed_switch_rx,
            preset: initial,
            fast: Duration::from_millis(config.fast_ms),
            slow: Duration::from_millis(config.slow_ms),
        }
    }
}

impl SpeedSelector for SpeedSwitch {
    fn current_speed_interval(&mut self) -> Duration {
        if let Some(preset) = self.speed_switch_rx.try_iter().last() {
            debug!("Speed switch set to {:?}", preset);
            self.preset = preset;
        }

        match self.preset {
            SpeedPreset::Fast => self.fast,
            SpeedPreset::Slow => self.slow,
        }
    }
}
