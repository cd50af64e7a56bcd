//! Terminal rendering of the bubble field
//!
//! Purely decorative: an alternate-screen frame loop that steps the simulator
//! at a fixed rate and rasterizes each bubble as a shaded circle on the cell
//! grid. A keypress stands in for the pointer and perturbs a random bubble.
//! Nothing here may poison the console - errors bubble up and the terminal is
//! restored on every exit path.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::FIELD_FPS;
use crate::settings::Settings;
use crate::sim::{BubbleField, perturb, step};

/// Terminal cells are roughly twice as tall as wide; vertical extents are
/// squashed by this factor so bubbles read as circles.
const CELL_ASPECT: f32 = 0.5;

const PALETTE: &[Color] = &[
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::White,
];

/// Restores the terminal no matter how the loop exits.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the field view until the user leaves (`q` or Esc).
///
/// Space (or any other key) perturbs a random bubble, `r` reshuffles the
/// whole field with a fresh seed.
pub fn run(settings: &Settings, seed: u64) -> Result<()> {
    let _guard = ScreenGuard::enter()?;

    let mut field = BubbleField::new(settings.bubble_count, seed);
    let mut rng = Pcg32::seed_from_u64(seed ^ 0x9e37_79b9);
    let frame_dur = Duration::from_millis(1000 / FIELD_FPS);
    let mut last_frame = Instant::now();
    let mut running = true;

    log::info!(
        "Field view: {} bubbles, seed {}",
        settings.bubble_count,
        seed
    );

    while running {
        // Drain input while waiting out the rest of the frame
        let remaining = frame_dur.saturating_sub(last_frame.elapsed());
        if event::poll(remaining)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => running = false,
                        KeyCode::Char('r') => {
                            let reseed = rng.random::<u64>();
                            field = BubbleField::new(settings.bubble_count, reseed);
                        }
                        _ => {
                            if !field.is_empty() {
                                let id = rng.random_range(0..field.len() as u32);
                                field = perturb(&field, id, &mut rng);
                            }
                        }
                    }
                }
            }
        }

        if last_frame.elapsed() >= frame_dur {
            last_frame = Instant::now();
            field = step(&field, settings.viewport_width);
            draw(&field, settings.viewport_width)?;
        }
    }

    Ok(())
}

/// Rasterize the field onto the current terminal grid.
fn draw(field: &BubbleField, viewport_width: f32) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    if cols == 0 {
        return Ok(());
    }
    let cols = cols as usize;
    // Last row is the status line
    let rows = (rows as usize).saturating_sub(1).max(1);

    let mut grid: Vec<Vec<(char, Color)>> = vec![vec![(' ', Color::Reset); cols]; rows];

    for b in &field.bubbles {
        let color = PALETTE[b.id as usize % PALETTE.len()];
        let cx = b.pos.x / 100.0 * cols as f32;
        let cy = b.pos.y / 100.0 * rows as f32;
        // Radius in columns, squashed vertically for the cell aspect
        let rx = (b.radius(viewport_width) / 100.0 * cols as f32).max(1.0);
        let ry = (rx * CELL_ASPECT).max(1.0);

        let row_min = ((cy - ry).floor().max(0.0)) as usize;
        let row_max = ((cy + ry).ceil() as usize).min(rows.saturating_sub(1));
        let col_min = ((cx - rx).floor().max(0.0)) as usize;
        let col_max = ((cx + rx).ceil() as usize).min(cols.saturating_sub(1));

        for row in row_min..=row_max {
            for col in col_min..=col_max {
                let dx = (col as f32 + 0.5 - cx) / rx;
                let dy = (row as f32 + 0.5 - cy) / ry;
                let d2 = dx * dx + dy * dy;
                if d2 <= 1.0 {
                    // Rim glyph at the edge, soft fill inside
                    let glyph = if d2 > 0.72 { 'o' } else { '.' };
                    grid[row][col] = (glyph, color);
                }
            }
        }

        // Sprite tag at the bubble center
        let tag = format!("#{}", b.sprite);
        let tag_row = cy as usize;
        let tag_col = (cx as usize).saturating_sub(tag.len() / 2);
        if tag_row < rows {
            for (i, ch) in tag.chars().enumerate() {
                if tag_col + i < cols {
                    grid[tag_row][tag_col + i] = (ch, color);
                }
            }
        }
    }

    let mut stdout = io::stdout();
    queue!(stdout, cursor::MoveTo(0, 0))?;
    for (i, row) in grid.iter().enumerate() {
        let mut current = Color::Reset;
        for &(ch, color) in row {
            if ch != ' ' && color != current {
                queue!(stdout, SetForegroundColor(color))?;
                current = color;
            }
            queue!(stdout, Print(ch))?;
        }
        queue!(stdout, ResetColor, Clear(ClearType::UntilNewLine))?;
        if i + 1 < grid.len() {
            queue!(stdout, Print("\r\n"))?;
        }
    }

    queue!(
        stdout,
        Print("\r\n"),
        Print(format!(
            " frame {} | {} bubbles | any key: bounce | r: reshuffle | q: back",
            field.frame,
            field.len()
        )),
        Clear(ClearType::UntilNewLine),
    )?;
    stdout.flush()?;
    Ok(())
}
