//! Shape module - immutable occupancy masks
//!
//! A shape is the geometry of one piece orientation: a small row-major grid
//! of occupied/empty cells. Shapes are values; rotating one yields a new
//! shape and never touches the original.
//!
//! Storage is a fixed-capacity [`ArrayVec`] so shapes never allocate.

use arrayvec::ArrayVec;
use thiserror::Error;

/// Largest number of rows or columns a shape may span
pub const MAX_SHAPE_SIDE: usize = 16;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Reasons a mask is rejected by [`Shape::from_rows`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no rows or no columns")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("shape is {rows}x{cols}, exceeding the size limit")]
    TooLarge { rows: usize, cols: usize },
    #[error("shape has an empty bounding margin")]
    EmptyMargin,
}

/// Occupancy grid of one piece orientation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    /// Row-major occupancy (row * cols + col)
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from rows of `0`/`1` values.
    ///
    /// Every row must have the same length, and the first and last row and
    /// column must each contain at least one occupied cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((t.height(), t.width()), (2, 3));
    /// assert!(Shape::from_rows(&[&[0, 1], &[0, 1]]).is_err());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return Err(ShapeError::TooLarge {
                rows: height,
                cols: width,
            });
        }

        let mut cells = ArrayVec::new();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(ShapeError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values.iter().map(|&v| v != 0));
        }

        let shape = Self {
            rows: height,
            cols: width,
            cells,
        };
        if !shape.has_tight_margins() {
            return Err(ShapeError::EmptyMargin);
        }
        Ok(shape)
    }

    /// Build a shape from a mask known to be well formed (the piece catalog).
    pub(crate) fn from_trusted(rows: &[&[u8]]) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        let cells = rows
            .iter()
            .flat_map(|r| r.iter().map(|&v| v != 0))
            .collect();
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows
    }

    /// Whether the cell at `(row, col)` is occupied; false outside the mask
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Occupied cells as `(row, col)` offsets, in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rotate 90° clockwise.
    ///
    /// An `R x C` mask becomes `C x R`, with
    /// `rotated[j][R - 1 - i] = original[i][j]`.
    pub fn rotate(&self) -> Shape {
        let (rows, cols) = (self.cols, self.rows);
        let mut cells: ArrayVec<bool, MAX_SHAPE_CELLS> = ArrayVec::new();
        cells.extend(std::iter::repeat(false).take(rows * cols));
        for i in 0..self.rows {
            for j in 0..self.cols {
                cells[j * cols + (self.rows - 1 - i)] = self.cells[i * self.cols + j];
            }
        }
        Shape { rows, cols, cells }
    }

    /// Copy the mask back out as rows of `0`/`1`
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|&c| c as u8).collect())
            .collect()
    }

    fn has_tight_margins(&self) -> bool {
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        let row_used = |r: usize| (0..self.cols).any(|c| self.is_occupied(r, c));
        let col_used = |c: usize| (0..self.rows).any(|r| self.is_occupied(r, c));
        row_used(0) && row_used(last_row) && col_used(0) && col_used(last_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_dimensions() {
        let l = Shape::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]).unwrap();
        assert_eq!(l.height(), 3);
        assert_eq!(l.width(), 2);
        assert_eq!(l.cell_count(), 4);
        assert!(l.is_occupied(2, 1));
        assert!(!l.is_occupied(0, 1));
        assert!(!l.is_occupied(3, 0));
    }

    #[test]
    fn test_from_rows_rejects_bad_masks() {
        assert_eq!(Shape::from_rows(&[]), Err(ShapeError::Empty));
        assert_eq!(Shape::from_rows(&[&[]]), Err(ShapeError::Empty));
        assert_eq!(
            Shape::from_rows(&[&[1, 1], &[1]]),
            Err(ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Shape::from_rows(&[&[1, 1], &[0, 0]]),
            Err(ShapeError::EmptyMargin)
        );
        let wide = [1u8; MAX_SHAPE_SIDE + 1];
        assert_eq!(
            Shape::from_rows(&[&wide]),
            Err(ShapeError::TooLarge {
                rows: 1,
                cols: MAX_SHAPE_SIDE + 1
            })
        );
    }

    #[test]
    fn test_rotate_z() {
        let z = Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]).unwrap();
        let r = z.rotate();
        assert_eq!(r.to_rows(), vec![vec![0, 1], vec![1, 1], vec![1, 0]]);
    }

    #[test]
    fn test_rotate_bar_swaps_dimensions() {
        let bar = Shape::from_rows(&[&[1], &[1], &[1], &[1]]).unwrap();
        let flat = bar.rotate();
        assert_eq!((flat.height(), flat.width()), (1, 4));
        assert_eq!(flat.rotate(), bar);
    }

    #[test]
    fn test_occupied_cells_order() {
        let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
        let cells: Vec<_> = t.occupied_cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
    }
}
