//! Crossterm renderer: raw-mode lifecycle plus a full redraw of the
//! well, sidebar, and overlays every frame.
//!
//! Grid coordinates have row 0 at the bottom; the screen has row 0 at
//! the top, so rows are flipped on the way out. Each grid cell is two
//! terminal columns wide.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::Game;
use crate::term::palette::{color, Rgb, BACKGROUND, FRAME, WHITE};
use crate::types::{CellBox, GRID_HEIGHT, GRID_WIDTH};

/// Left margin of the well frame, in terminal columns.
const WELL_X: u16 = 2;
/// Top margin of the well frame, in terminal rows.
const WELL_Y: u16 = 1;
/// Terminal columns per grid cell.
const CELL_W: u16 = 2;

/// Grid anchor for the next-piece preview, to the right of the well.
const PREVIEW_COL: i32 = GRID_WIDTH + 2;
const PREVIEW_ROW: i32 = GRID_HEIGHT - 1;

pub struct Renderer {
    stdout: io::Stdout,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Screen position of a grid cell. Column -1 and `GRID_WIDTH` land
    /// on the frame; rows are flipped.
    fn cell_position(col: i32, row: i32) -> (u16, u16) {
        let x = WELL_X as i32 + (col + 1) * CELL_W as i32;
        let y = WELL_Y as i32 + (GRID_HEIGHT - 1 - row);
        (x as u16, y as u16)
    }

    fn fill_cell(&mut self, col: i32, row: i32, bg: Rgb) -> Result<()> {
        // Cells above the visible top (a piece falling in) are clipped.
        if row >= GRID_HEIGHT {
            return Ok(());
        }
        let (x, y) = Self::cell_position(col, row);
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(SetBackgroundColor(to_term(bg)))?;
        self.stdout.queue(Print("  "))?;
        Ok(())
    }

    fn outline_cell(&mut self, col: i32, row: i32, fg: Rgb) -> Result<()> {
        if row >= GRID_HEIGHT {
            return Ok(());
        }
        let (x, y) = Self::cell_position(col, row);
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(SetBackgroundColor(to_term(BACKGROUND)))?;
        self.stdout.queue(SetForegroundColor(to_term(fg)))?;
        self.stdout.queue(Print("░░"))?;
        Ok(())
    }

    fn draw_boxes(&mut self, boxes: impl Iterator<Item = CellBox>) -> Result<()> {
        for b in boxes {
            self.fill_cell(b.col, b.row, color(b.color_index))?;
        }
        Ok(())
    }

    fn draw_well(&mut self, game: &Game) -> Result<()> {
        // Empty interior.
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                self.fill_cell(col, row, BACKGROUND)?;
            }
        }
        // Side walls and floor.
        for row in 0..GRID_HEIGHT {
            self.fill_cell(-1, row, FRAME)?;
            self.fill_cell(GRID_WIDTH, row, FRAME)?;
        }
        for col in -1..=GRID_WIDTH {
            let (x, y) = Self::cell_position(col, -1);
            self.stdout.queue(cursor::MoveTo(x, y))?;
            self.stdout.queue(SetBackgroundColor(to_term(FRAME)))?;
            self.stdout.queue(Print("  "))?;
        }

        self.draw_boxes(game.grid().boxes())?;
        Ok(())
    }

    fn draw_ghost(&mut self, game: &Game) -> Result<()> {
        let ghost = game.current_shape().projection(game.grid());
        let fg = color(ghost.color_index());
        for (col, row) in ghost.cells() {
            self.outline_cell(col, row, fg)?;
        }
        Ok(())
    }

    fn draw_preview(&mut self, game: &Game) -> Result<()> {
        let preview = game.next_shape().positioned_projection(PREVIEW_COL, PREVIEW_ROW);
        // Clear the preview area first; kinds differ in footprint.
        for row in (PREVIEW_ROW - 3)..=PREVIEW_ROW {
            for col in PREVIEW_COL..PREVIEW_COL + 4 {
                let (x, y) = Self::cell_position(col, row);
                self.stdout.queue(cursor::MoveTo(x, y))?;
                self.stdout.queue(SetBackgroundColor(to_term(BACKGROUND)))?;
                self.stdout.queue(Print("  "))?;
            }
        }
        for b in preview.boxes() {
            let (x, y) = Self::cell_position(b.col, b.row);
            self.stdout.queue(cursor::MoveTo(x, y))?;
            self.stdout
                .queue(SetBackgroundColor(to_term(color(b.color_index))))?;
            self.stdout.queue(Print("  "))?;
        }
        Ok(())
    }

    fn label(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(SetBackgroundColor(to_term(BACKGROUND)))?;
        self.stdout.queue(SetForegroundColor(to_term(WHITE)))?;
        // Pad so shrinking numbers do not leave stale digits.
        self.stdout.queue(Print(format!("{text:<20}")))?;
        Ok(())
    }

    fn draw_stats(&mut self, game: &Game) -> Result<()> {
        let (x, _) = Self::cell_position(PREVIEW_COL, 0);
        let speed = if game.at_max_speed() {
            "Speed: MAX".to_string()
        } else {
            format!("Speed: {}", game.speed())
        };
        self.label(x, WELL_Y + 6, &speed)?;
        self.label(x, WELL_Y + 7, &format!("Lines: {}", game.lines()))?;
        self.label(x, WELL_Y + 8, &format!("Score: {}", game.score()))?;
        Ok(())
    }

    fn draw_center_text(&mut self, y_offset: u16, text: &str) -> Result<()> {
        let well_width = (GRID_WIDTH as u16 + 2) * CELL_W;
        let x = WELL_X + well_width.saturating_sub(text.len() as u16) / 2;
        self.stdout.queue(cursor::MoveTo(x, WELL_Y + y_offset))?;
        self.stdout.queue(SetBackgroundColor(to_term(BACKGROUND)))?;
        self.stdout.queue(SetForegroundColor(to_term(WHITE)))?;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        self.stdout.queue(Print(text))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn draw_pause(&mut self) -> Result<()> {
        self.draw_center_text(9, " Paused ")
    }

    fn draw_game_over(&mut self, game: &Game) -> Result<()> {
        self.draw_center_text(7, " Game Over ")?;
        self.draw_center_text(9, &format!(" Your score: {} ", game.score()))?;
        self.draw_center_text(10, &format!(" Lines cleared: {} ", game.lines()))?;
        self.draw_center_text(12, " Press Enter to restart ")?;
        Ok(())
    }

    /// Draw one frame of the game.
    pub fn draw(&mut self, game: &Game) -> Result<()> {
        self.draw_well(game)?;

        // Ghost first so the active shape overdraws it when resting.
        if !game.over() && !game.paused() {
            self.draw_ghost(game)?;
        }
        self.draw_boxes(game.current_shape().boxes())?;

        if game.over() {
            self.draw_game_over(game)?;
        } else {
            self.draw_stats(game)?;
            self.draw_preview(game)?;
            if game.paused() {
                self.draw_pause()?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_term(rgb: Rgb) -> crossterm::style::Color {
    crossterm::style::Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
