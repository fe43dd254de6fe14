use crate::panel::Buzzer;
use crate::shared::Tone;
use log::{debug, warn};
use std::io::Write;

/// Rings the terminal bell for every tone. Never waits for the tone's
/// duration, so the tick loop keeps running.
pub struct TerminalBuzzer<W: Write> {
    out: W,
}

impl<W: Write> TerminalBuzzer<W> {
    pub fn new(out: W) -> TerminalBuzzer<W> {
        TerminalBuzzer { out }
    }
}

impl<W: Write> Buzzer for TerminalBuzzer<W> {
    fn emit_tone(&mut self, tone: Tone) {
        debug!("Beep {} Hz for {} ms", tone.frequency_hz, tone.duration_ms);
        let result = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to ring terminal bell: {}", e);
        }
    }
}
