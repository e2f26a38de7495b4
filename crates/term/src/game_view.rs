//! GameView: maps a [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Game, Piece};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::ColorTag;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: ColorTag = ColorTag::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(ColorTag::new(200, 200, 200), ColorTag::new(0, 0, 0));
const LABEL: CellStyle =
    CellStyle::new(ColorTag::new(220, 220, 220), ColorTag::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(ColorTag::new(200, 200, 200), ColorTag::new(0, 0, 0));
const OVERLAY: CellStyle =
    CellStyle::new(ColorTag::new(255, 255, 255), ColorTag::new(0, 0, 0)).bold();

/// Glyph for a filled cell
pub const BLOCK: char = '█';

/// Glyph for an empty cell
pub const EMPTY_DOT: char = '·';

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let board = game.board();
        let frame_w = (board.width() as u16).saturating_mul(self.cell_w) + 2;
        let frame_h = board.height() as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_board(fb, board, start_x, start_y);
        if !game.is_game_over() {
            self.draw_piece(fb, game.active(), start_x, start_y);
        }
        self.draw_side_panel(fb, game, viewport, start_x + frame_w + 2, start_y);

        if game.is_game_over() {
            let mid_y = start_y + frame_h / 2;
            self.draw_centered(fb, start_x, frame_w, mid_y, "GAME OVER");
            self.draw_centered(fb, start_x, frame_w, mid_y + 1, "R: restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, board: &Board, start_x: u16, start_y: u16) {
        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (ch, fg) = if cell.is_occupied() {
                    (BLOCK, cell.color)
                } else {
                    (EMPTY_DOT, cell.color.scaled(0.5))
                };
                self.fill_cell(fb, start_x, start_y, row, col, ch, CellStyle::new(fg, WELL_BG));
            }
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, piece: &Piece, start_x: u16, start_y: u16) {
        let style = CellStyle::new(piece.color, WELL_BG).bold();
        for (row, col) in piece.board_cells() {
            if row >= 0 && col >= 0 {
                self.fill_cell(fb, start_x, start_y, row as usize, col as usize, BLOCK, style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col as u16 * self.cell_w;
        let py = start_y + 1 + row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let mut y = start_y;
        for (label, value) in [
            ("SCORE", game.score()),
            ("LINES", game.lines()),
            ("PIECES", game.pieces_locked()),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y + 1, value, VALUE);
            y += 3;
        }
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, start_x: u16, frame_w: u16, y: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, OVERLAY);
    }
}
