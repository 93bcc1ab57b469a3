//! Character-cell surface for the terminal
//!
//! The board is sampled onto a coarse grid; a sprite fills every cell its
//! rectangle touches. Cells are taller than wide, like terminal glyphs.

use super::{DrawSurface, Sprite};
use crate::sim::Aabb;
use crate::tuning::Tuning;

/// Board units covered by one cell
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 26.0;

const BLANK: char = ' ';

/// A grid of glyphs standing in for pixels
#[derive(Debug, Clone)]
pub struct CellBuffer {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl CellBuffer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
        }
    }

    /// Size the grid to cover the whole board
    pub fn for_board(tuning: &Tuning) -> Self {
        Self::new(
            (tuning.board_width / CELL_WIDTH).ceil() as usize,
            (tuning.board_height / CELL_HEIGHT).ceil() as usize,
        )
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row_text(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols].iter().collect()
    }

    fn fill(&mut self, rect: Aabb, glyph: char) {
        let col_start = (rect.left() / CELL_WIDTH).floor().max(0.0) as usize;
        let col_end = ((rect.right() / CELL_WIDTH).ceil().max(0.0) as usize).min(self.cols);
        let row_start = (rect.top() / CELL_HEIGHT).floor().max(0.0) as usize;
        let row_end = ((rect.bottom() / CELL_HEIGHT).ceil().max(0.0) as usize).min(self.rows);

        for row in row_start..row_end {
            for col in col_start..col_end {
                self.cells[row * self.cols + col] = glyph;
            }
        }
    }

    /// Write the grid and HUD lines to a terminal
    #[cfg(not(target_arch = "wasm32"))]
    pub fn present(&self, out: &mut impl std::io::Write, hud: &super::Hud) -> std::io::Result<()> {
        use crossterm::{cursor, queue, style, terminal};
        use std::io::Write;

        let border = format!("+{}+", "-".repeat(self.cols));
        queue!(out, cursor::MoveTo(0, 0), style::Print(&border))?;
        for row in 0..self.rows {
            queue!(
                out,
                cursor::MoveTo(0, row as u16 + 1),
                style::Print(format!("|{}|", self.row_text(row)))
            )?;
        }
        let footer = self.rows as u16 + 1;
        queue!(
            out,
            cursor::MoveTo(0, footer),
            style::Print(&border),
            cursor::MoveTo(0, footer + 1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(&hud.score_text),
            cursor::MoveTo(0, footer + 2),
            terminal::Clear(terminal::ClearType::CurrentLine),
        )?;
        if hud.game_over_visible {
            queue!(out, style::Print("Game over! Press Space to restart, q to quit"))?;
        }
        out.flush()
    }
}

impl DrawSurface for CellBuffer {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Aabb) {
        let glyph = match sprite {
            Sprite::PlayerLeft => '<',
            Sprite::PlayerRight => '>',
            Sprite::Platform => '=',
        };
        self.fill(rect, glyph);
    }
}
