//! Piece module - the active falling piece
//!
//! A piece is a [`Shape`] placed on the board at `(x, y)` (column and row of
//! the shape's top-left corner) plus the color tag it keeps for its lifetime.
//!
//! Pieces never validate their own moves. Whether a translation or rotation
//! is legal depends on the board, so the game loop asks the board first and
//! only then commits the change here.

use std::ops::Range;

use crate::pieces::{get_color, get_shape};
use crate::shape::Shape;
use crate::types::{ColorTag, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: ColorTag,
}

impl Piece {
    pub fn new(shape: Shape, x: i32, y: i32, color: ColorTag) -> Self {
        Self { shape, x, y, color }
    }

    /// Create a catalog piece in its spawn orientation
    pub fn spawn(kind: PieceKind, x: i32, y: i32) -> Self {
        Self::new(get_shape(kind), x, y, get_color(kind))
    }

    pub fn width(&self) -> usize {
        self.shape.width()
    }

    pub fn height(&self) -> usize {
        self.shape.height()
    }

    /// Candidate shape for a clockwise rotation (not applied)
    pub fn rotated_shape(&self) -> Shape {
        self.shape.rotate()
    }

    /// Replace the shape, keeping position and color
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Board rows covered by the bounding box, clipped below zero
    pub fn row_span(&self) -> Range<usize> {
        let top = self.y.max(0) as usize;
        let bottom = (self.y + self.height() as i32).max(0) as usize;
        top..bottom
    }

    /// Occupied cells in board coordinates, as `(row, col)`
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied_cells()
            .map(move |(r, c)| (self.y + r as i32, self.x + c as i32))
    }
}
