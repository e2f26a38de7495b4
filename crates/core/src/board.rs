//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of locked cells. Each cell carries its
//! occupancy and the color tag shown for it, stored together in one flat
//! row-major vector so the two can never disagree on dimensions.
//!
//! Coordinates are `(row, col)` with row 0 at the top. Every accessor is
//! bounds-checked; out-of-range queries read as blocked rather than failing.
//!
//! Collision queries take a piece position `(x, y)` and a [`Shape`]:
//! - [`Board::collides_below`] tests the placement one row lower
//! - [`Board::collides_left`] / [`Board::collides_right`] test the leading
//!   column at the given (candidate) column
//! - [`Board::overlaps`] tests the full footprint at exactly `(x, y)`

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{CellState, ColorTag};

/// One board cell: occupancy plus visual tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardCell {
    pub state: CellState,
    pub color: ColorTag,
}

impl BoardCell {
    pub const EMPTY: BoardCell = BoardCell {
        state: CellState::Empty,
        color: ColorTag::BACKGROUND,
    };

    pub fn occupied(color: ColorTag) -> Self {
        Self {
            state: CellState::Occupied,
            color,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.state == CellState::Occupied
    }
}

impl Default for BoardCell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// row * width + col
    cells: Vec<BoardCell>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BoardCell::EMPTY; width * height],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<BoardCell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Color tag at (row, col); None if out of bounds
    pub fn color(&self, row: i32, col: i32) -> Option<ColorTag> {
        self.get(row, col).map(|cell| cell.color)
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: BoardCell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True only for an in-bounds, empty cell
    pub fn is_cell_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(cell) if !cell.is_occupied())
    }

    /// True only for an in-bounds, occupied cell
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(cell) if cell.is_occupied())
    }

    /// Would `shape` at `(x, y + 1)` leave the board or hit a locked cell?
    ///
    /// The floor test uses the shape's full bounding-box height, not the
    /// lowest occupied cell of each column.
    pub fn collides_below(&self, x: i32, y: i32, shape: &Shape) -> bool {
        let next_y = y + 1;
        if next_y + shape.height() as i32 > self.height as i32 {
            return true;
        }
        shape
            .occupied_cells()
            .any(|(r, c)| !self.is_cell_free(next_y + r as i32, x + c as i32))
    }

    /// Is `x` past the left wall, or is the shape's leftmost column blocked at `x`?
    ///
    /// Only the leading column is tested; the rest of the shape is assumed
    /// to have been valid one column to the right.
    pub fn collides_left(&self, x: i32, y: i32, shape: &Shape) -> bool {
        if x < 0 {
            return true;
        }
        (0..shape.height())
            .any(|r| shape.is_occupied(r, 0) && !self.is_cell_free(y + r as i32, x))
    }

    /// Does the bounding box pass the right wall, or is the shape's rightmost
    /// column blocked at `x`?
    pub fn collides_right(&self, x: i32, y: i32, shape: &Shape) -> bool {
        if x + shape.width() as i32 > self.width as i32 {
            return true;
        }
        let last = shape.width() - 1;
        (0..shape.height()).any(|r| {
            shape.is_occupied(r, last) && !self.is_cell_free(y + r as i32, x + last as i32)
        })
    }

    /// Does any occupied cell of `shape` at exactly `(x, y)` fall on a blocked cell?
    pub fn overlaps(&self, x: i32, y: i32, shape: &Shape) -> bool {
        shape
            .occupied_cells()
            .any(|(r, c)| !self.is_cell_free(y + r as i32, x + c as i32))
    }

    /// Lock a piece into the board, storing the shaded color tag per cell.
    ///
    /// Returns false if any cell fell outside the board (those cells are skipped).
    pub fn lock_piece(&mut self, piece: &Piece) -> bool {
        let cell = BoardCell::occupied(piece.color.locked());
        let mut all_in_bounds = true;
        for (row, col) in piece.board_cells() {
            all_in_bounds &= self.set(row, col, cell);
        }
        all_in_bounds
    }

    /// Borrow one row; None if out of bounds
    pub fn row(&self, row: usize) -> Option<&[BoardCell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[BoardCell]> {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(BoardCell::is_occupied))
    }

    /// Remove a row, shift every row above it down by one and insert an
    /// empty row at the top. Rows below are untouched.
    ///
    /// Returns false (and does nothing) if the row is out of bounds.
    pub fn remove_row(&mut self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let width = self.width;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(BoardCell::EMPTY);
        true
    }

    /// Remove every complete row in `[start, end)` and return how many went.
    ///
    /// Scans top to bottom. Removing a row only shifts rows above it, so the
    /// rows still to be visited keep their index.
    pub fn clear_completed_rows(&mut self, start: usize, end: usize) -> usize {
        let end = end.min(self.height);
        let mut cleared = 0;
        for row in start..end {
            if self.is_row_complete(row) {
                self.remove_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(BoardCell::EMPTY);
    }

    /// Number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Build a board from text rows, `#` occupied and anything else empty.
    ///
    /// Occupied cells get `color`. Rows shorter than the first are padded empty.
    ///
    /// ```
    /// use blockfall_core::Board;
    /// use blockfall_core::types::ColorTag;
    ///
    /// let board = Board::from_text(&["..#", "###"], ColorTag::BACKGROUND);
    /// assert!(board.is_row_complete(1));
    /// assert!(!board.is_cell_free(0, 2));
    /// ```
    pub fn from_text(rows: &[&str], color: ColorTag) -> Self {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut board = Self::new(width, rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(width).enumerate() {
                if ch == '#' {
                    board.set(row as i32, col as i32, BoardCell::occupied(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_WIDTH,
            crate::types::DEFAULT_BOARD_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(rows: &[&[u8]]) -> Shape {
        Shape::from_rows(rows).unwrap()
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 15);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(14, 9), Some(149));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(15, 0), None);
    }

    #[test]
    fn test_is_cell_free_is_bounds_and_occupancy() {
        let mut board = Board::new(4, 4);
        assert!(board.is_cell_free(0, 0));
        assert!(!board.is_cell_free(-1, 0));
        assert!(!board.is_cell_free(0, 4));
        board.set(2, 1, BoardCell::occupied(ColorTag::new(1, 2, 3)));
        assert!(!board.is_cell_free(2, 1));
        assert!(board.is_occupied(2, 1));
        assert!(!board.is_occupied(9, 9));
    }

    #[test]
    fn test_collides_below_uses_bounding_height() {
        let board = Board::new(4, 5);
        let bar = shape(&[&[1], &[1]]);
        assert!(!board.collides_below(0, 2, &bar));
        assert!(board.collides_below(0, 3, &bar));
    }

    #[test]
    fn test_collides_left_only_checks_leading_column() {
        let mut board = Board::from_text(&["....", "....", "...."], ColorTag::BACKGROUND);
        // Blocked cell under the second column of the shape.
        board.set(1, 2, BoardCell::occupied(ColorTag::BACKGROUND));
        let t = shape(&[&[1, 1, 1], &[0, 1, 0]]);
        assert!(!board.collides_left(1, 0, &t));
        board.set(0, 1, BoardCell::occupied(ColorTag::BACKGROUND));
        assert!(board.collides_left(1, 0, &t));
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::from_text(&["#...", ".#..", "####", "...#"], ColorTag::BACKGROUND);
        assert!(board.remove_row(2));
        let expected = Board::from_text(&["....", "#...", ".#..", "...#"], ColorTag::BACKGROUND);
        assert_eq!(board, expected);
        assert!(!board.remove_row(4));
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let board = Board::from_text(&["#..", "..."], ColorTag::BACKGROUND);
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0][0].is_occupied());
        assert!(rows[1].iter().all(|c| !c.is_occupied()));
    }
}
