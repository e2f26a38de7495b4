//! Pieces module - the fixed piece catalog
//!
//! Five kinds, each with one spawn orientation and a base color tag.
//! Other orientations are derived with [`Shape::rotate`].

use crate::shape::Shape;
use crate::types::{ColorTag, PieceKind};

const O_MASK: &[&[u8]] = &[&[1, 1], &[1, 1]];
const L_MASK: &[&[u8]] = &[&[1, 0], &[1, 0], &[1, 1]];
const Z_MASK: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const T_MASK: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const I_MASK: &[&[u8]] = &[&[1], &[1], &[1], &[1]];

/// Widest spawn orientation in the catalog
pub const MAX_CATALOG_WIDTH: usize = 3;

/// Tallest spawn orientation in the catalog
pub const MAX_CATALOG_HEIGHT: usize = 4;

fn mask(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::O => O_MASK,
        PieceKind::L => L_MASK,
        PieceKind::Z => Z_MASK,
        PieceKind::T => T_MASK,
        PieceKind::I => I_MASK,
    }
}

/// Spawn shape of a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    Shape::from_trusted(mask(kind))
}

/// Base color tag of a piece kind
pub fn get_color(kind: PieceKind) -> ColorTag {
    match kind {
        PieceKind::O => ColorTag::new(51, 153, 255),
        PieceKind::L => ColorTag::new(255, 0, 0),
        PieceKind::Z => ColorTag::new(0, 255, 0),
        PieceKind::T => ColorTag::new(255, 255, 0),
        PieceKind::I => ColorTag::new(0, 255, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_masks_are_well_formed() {
        for kind in PieceKind::ALL {
            let checked = Shape::from_rows(mask(kind)).unwrap();
            assert_eq!(checked, get_shape(kind), "{:?}", kind);
        }
    }

    #[test]
    fn catalog_extents() {
        let widest = PieceKind::ALL.iter().map(|&k| get_shape(k).width()).max();
        let tallest = PieceKind::ALL.iter().map(|&k| get_shape(k).height()).max();
        assert_eq!(widest, Some(MAX_CATALOG_WIDTH));
        assert_eq!(tallest, Some(MAX_CATALOG_HEIGHT));
    }

    #[test]
    fn every_piece_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).cell_count(), 4);
        }
    }

    #[test]
    fn colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(get_color(*a), get_color(*b));
            }
        }
    }
}
