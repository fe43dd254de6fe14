/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossterm::{cursor, style, terminal, QueueableCommand};
use std::io::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Statistics;
use crate::panel::Renderer;
use crate::shared::{Direction, DoorPhase, ElevatorStatus, FinePosition, Stage, N_FLOORS};

/***************************************/
/*             Constants               */
/***************************************/
pub const GRID_HEIGHT: u8 = 16;
pub const GRID_WIDTH: usize = 8;
const SHAFT_COLUMNS: [usize; 2] = [1, 2];
const CAR_HEIGHT: u8 = 3;
const PICKUP_COLUMN: usize = 3;
const WAITING_COLUMN: usize = 4;

const SEGMENT_COLUMN: u16 = GRID_WIDTH as u16 + 4;
const STATUS_ROW: u16 = GRID_HEIGHT as u16 + 1;

/***************************************/
/*          Pure drawing API           */
/***************************************/

/// Draws the shaft as text, top row first. Floors are full rows of `=`, the
/// car is a 2x3 block above its position, waiting passengers are drawn to the
/// right of the shaft as the digit of the floor they want to reach.
pub fn render_grid(status: &ElevatorStatus) -> Vec<String> {
    let mut rows = Vec::with_capacity(GRID_HEIGHT as usize);
    let car_glyphs = car_glyphs(status.door_phase);
    let bottom = status.position.units();

    for y in (0..GRID_HEIGHT).rev() {
        let mut row = [' '; GRID_WIDTH];

        if is_floor_row(y) {
            row = ['='; GRID_WIDTH];
        } else {
            if y > bottom && y <= bottom + CAR_HEIGHT {
                row[SHAFT_COLUMNS[0]] = car_glyphs[0];
                row[SHAFT_COLUMNS[1]] = car_glyphs[1];
            }

            // Passengers stand on the row just above their floor
            if y % 4 == 1 {
                let floor = (y / 4) as usize;
                if let Some(trip) = status.active_trip {
                    if status.stage == Stage::MovingToOrigin && trip.origin.as_usize() == floor {
                        row[PICKUP_COLUMN] = floor_digit(trip.destination.value());
                    }
                }

                let shown = status.waiting.get(floor).copied().unwrap_or(0) as usize;
                let destinations = status
                    .waiting_destinations
                    .get(floor)
                    .map(|d| d.as_slice())
                    .unwrap_or(&[]);
                for (column, destination) in (WAITING_COLUMN..GRID_WIDTH)
                    .zip(destinations.iter().take(shown))
                {
                    row[column] = floor_digit(destination.value());
                }
            }
        }

        rows.push(row.iter().collect());
    }

    rows
}

/// Two-character stand-in for the seven-segment pair: a direction glyph
/// (top bar up, bottom bar down, middle bar stationary) and the floor digit.
pub fn segment_readout(status: &ElevatorStatus) -> String {
    let glyph = match status.direction {
        Direction::Up => '\u{203e}',
        Direction::Down => '_',
        Direction::Stationary => '-',
    };
    format!("{}{}", glyph, floor_digit(status.floor.value()))
}

pub fn status_lines(status: &ElevatorStatus) -> [String; 2] {
    [
        format!("Current Floor: {}", status.floor),
        format!("Direction: {}", status.direction),
    ]
}

pub fn statistics_lines(statistics: &Statistics) -> [String; 2] {
    [
        format!("Floors with passenger: {}", statistics.floors_with_passenger()),
        format!("Floors without passenger: {}", statistics.floors_without_passenger()),
    ]
}

fn is_floor_row(y: u8) -> bool {
    y % 4 == 0 && y / 4 < N_FLOORS
}

fn car_glyphs(phase: DoorPhase) -> [char; 2] {
    match phase {
        DoorPhase::Closed | DoorPhase::Opening => ['#', '#'],
        DoorPhase::Open => ['[', ']'],
        DoorPhase::Closing => ['#', ']'],
    }
}

fn floor_digit(floor: u8) -> char {
    char::from_digit(floor as u32, 10).unwrap_or('?')
}

/***************************************/
/*             Renderers               */
/***************************************/

/**
 * Redraws the shaft, the segment readout and the status text in place.
 *
 * The status lines are only rewritten when the position or direction changed,
 * and the statistics lines only when a counter moved.
 */
pub struct TerminalRenderer<W: Write> {
    out: W,
    cleared: bool,
    previous_status: Option<(FinePosition, Direction)>,
    previous_statistics: Option<Statistics>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> TerminalRenderer<W> {
        TerminalRenderer {
            out,
            cleared: false,
            previous_status: None,
            previous_statistics: None,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, column: u16, row: u16, text: &str) -> std::io::Result<()> {
        self.out
            .queue(cursor::MoveTo(column, row))?
            .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?
            .queue(style::Print(text))?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, status: &ElevatorStatus) -> std::io::Result<()> {
        if !self.cleared {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.cleared = true;
        }

        for (row, line) in render_grid(status).iter().enumerate() {
            self.out
                .queue(cursor::MoveTo(0, row as u16))?
                .queue(style::Print(line))?;
        }
        self.write_line(SEGMENT_COLUMN, 0, &segment_readout(status))?;

        let current = (status.position, status.direction);
        if self.previous_status != Some(current) {
            let [floor_line, direction_line] = status_lines(status);
            self.write_line(0, STATUS_ROW, &floor_line)?;
            self.write_line(0, STATUS_ROW + 1, &direction_line)?;
            self.previous_status = Some(current);
        }

        if self.previous_statistics != Some(status.statistics) {
            let [with_line, without_line] = statistics_lines(&status.statistics);
            self.write_line(0, STATUS_ROW + 2, &with_line)?;
            self.write_line(0, STATUS_ROW + 3, &without_line)?;
            self.previous_statistics = Some(status.statistics);
        }

        self.out.flush()
    }
}

/// Writes every status as one JSON object per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> JsonRenderer<W> {
        JsonRenderer { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, status: &ElevatorStatus) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, status)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
