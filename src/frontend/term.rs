//! Crossterm terminal frontend
//!
//! Scales the 288x512 playfield onto a character grid and samples keyboard
//! and mouse presses. Raw mode and the alternate screen are restored on
//! drop, including on panic unwinds.

use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    cursor, event,
    event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind},
    execute, queue,
    style::Print,
    terminal,
};

use super::{Frame, InputPulse, InputSource, Renderer};
use crate::consts::*;
use crate::sim::GameMode;

/// Character grid size. One cell covers 4x16 world pixels.
const COLS: usize = 72;
const ROWS: usize = 32;

const SCALE_X: f32 = SCREEN_W / COLS as f32;
const SCALE_Y: f32 = SCREEN_H / ROWS as f32;

/// The sim runs at 120 Hz; repainting a terminal that fast is waste.
/// Drawing every 4th tick still gives a 30 Hz picture.
pub const RENDER_DIVISOR: u64 = 4;

/// Optional title banner, one line per row of ASCII art.
const BANNER_PATH: &str = "assets/banner.txt";

/// Glyph per wing animation frame.
const BIRD_GLYPHS: [char; BIRD_FRAMES] = ['v', '-', '^'];

pub struct TermFrontend {
    out: Stdout,
    banner: Option<Vec<String>>,
}

impl TermFrontend {
    pub fn new() -> anyhow::Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
        )
        .context("entering alternate screen")?;

        Ok(Self {
            out,
            banner: load_banner(),
        })
    }

    fn blit(&mut self, grid: &[[char; COLS]; ROWS], header: &str) -> anyhow::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0), Print(center(header)))?;
        for (row, cells) in grid.iter().enumerate() {
            let line: String = cells.iter().collect();
            queue!(self.out, cursor::MoveTo(0, row as u16 + 1), Print(line))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Renderer for TermFrontend {
    fn draw(&mut self, frame: &Frame) -> anyhow::Result<()> {
        let mut grid = [[' '; COLS]; ROWS];

        // Ground strip with the scrolling pattern
        let shift = (-frame.ground_offset / SCALE_X) as usize;
        let ground_row = (GROUND_Y / SCALE_Y) as usize;
        for row in grid.iter_mut().skip(ground_row) {
            for (col, cell) in row.iter_mut().enumerate() {
                *cell = if (col + shift) % 4 < 2 { '#' } else { '=' };
            }
        }

        // Pipes; the upper half of a pair renders with its own texture so
        // the flip is visible even in character cells
        for pipe in &frame.pipes {
            let body = if pipe.flipped { ':' } else { '|' };
            let col_lo = (pipe.rect.left().max(0.0) / SCALE_X) as usize;
            let col_hi = ((pipe.rect.right() / SCALE_X) as usize).min(COLS - 1);
            let row_lo = (pipe.rect.top().max(0.0) / SCALE_Y) as usize;
            let row_hi = ((pipe.rect.bottom() / SCALE_Y) as usize).min(ground_row - 1);
            for row in row_lo..=row_hi.min(ROWS - 1) {
                for col in col_lo..=col_hi {
                    grid[row][col] = body;
                }
            }
        }

        // Bird
        let bird_col = ((frame.bird_pos.x / SCALE_X) as usize).min(COLS - 1);
        let bird_row = ((frame.bird_pos.y.max(0.0) / SCALE_Y) as usize).min(ROWS - 1);
        grid[bird_row][bird_col] = BIRD_GLYPHS[frame.bird_frame % BIRD_GLYPHS.len()];

        // Title overlay: banner art when present, plain prompt otherwise
        if frame.mode == GameMode::Title {
            match &self.banner {
                Some(lines) => {
                    for (i, line) in lines.iter().enumerate() {
                        stamp(&mut grid, 8 + i, line);
                    }
                }
                None => stamp(&mut grid, 12, "GAPWING - press Space or click to start"),
            }
            stamp(&mut grid, ROWS - 2, "q to quit");
        }

        let header = match frame.best {
            Some(best) => format!("SCORE {:>3}   BEST {:>3}", frame.score, best),
            None => format!("SCORE {:>3}", frame.score),
        };
        self.blit(&grid, &header)
    }
}

impl InputSource for TermFrontend {
    /// Drain every pending terminal event, collapsing key and mouse
    /// presses into one activation pulse for this tick.
    fn sample(&mut self) -> anyhow::Result<InputPulse> {
        let mut pulse = InputPulse::default();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char(' ') | KeyCode::Up => pulse.flap = true,
                    KeyCode::Char('q') | KeyCode::Esc => pulse.quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        pulse.quit = true;
                    }
                    _ => {}
                },
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) => {
                    pulse.flap = true;
                }
                _ => {}
            }
        }
        Ok(pulse)
    }
}

impl Drop for TermFrontend {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// The banner is decoration; a missing file just means the built-in text
/// prompt is used instead.
fn load_banner() -> Option<Vec<String>> {
    match std::fs::read_to_string(BANNER_PATH) {
        Ok(text) => {
            let lines: Vec<String> = text.lines().map(str::to_owned).collect();
            log::info!("Loaded title banner ({} lines)", lines.len());
            Some(lines)
        }
        Err(_) => {
            log::info!("No title banner at {BANNER_PATH}; using text prompt");
            None
        }
    }
}

/// Write `text` centered onto a grid row, clipped to the playfield.
fn stamp(grid: &mut [[char; COLS]; ROWS], row: usize, text: &str) {
    if row >= ROWS {
        return;
    }
    let start = COLS.saturating_sub(text.chars().count()) / 2;
    for (i, ch) in text.chars().enumerate() {
        if start + i < COLS {
            grid[row][start + i] = ch;
        }
    }
}

fn center(text: &str) -> String {
    let pad = COLS.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_centers_and_clips() {
        let mut grid = [[' '; COLS]; ROWS];
        stamp(&mut grid, 5, "ab");
        assert_eq!(grid[5][COLS / 2 - 1], 'a');
        assert_eq!(grid[5][COLS / 2], 'b');

        // Out-of-range rows are ignored
        stamp(&mut grid, ROWS + 3, "x");
    }
}
