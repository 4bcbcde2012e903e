//! Pieces module - shape catalog and the mutable piece built from it
//!
//! The catalog maps each kind to four cell offsets relative to a local
//! origin, with the x axis as the bottom edge of each shape (min y offset is
//! always 0). A `Piece` gets its own copy of the offsets because rotation
//! and kind resets rewrite them in place.

use crate::types::ShapeKind;

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i32, i32);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type ShapeCoords = [CellOffset; 4];

/// Canonical geometry for a piece kind.
///
/// Returns a fresh copy; callers mutate their copy freely. Total over all
/// eight kinds, `None` is four copies of the origin.
pub fn shape_coords(kind: ShapeKind) -> ShapeCoords {
    match kind {
        ShapeKind::None => [(0, 0), (0, 0), (0, 0), (0, 0)],
        ShapeKind::I => [(0, 3), (0, 2), (0, 1), (0, 0)],
        ShapeKind::J => [(-1, 0), (0, 0), (0, 1), (0, 2)],
        ShapeKind::L => [(1, 0), (0, 0), (0, 1), (0, 2)],
        ShapeKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
        ShapeKind::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        ShapeKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        ShapeKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
    }
}

/// A geometric instance of one catalog shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    coords: ShapeCoords,
}

impl Piece {
    /// Create a piece with a private copy of the catalog geometry
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            coords: shape_coords(kind),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The four cell offsets of this piece
    pub fn coords(&self) -> &ShapeCoords {
        &self.coords
    }

    /// Reset this piece to another kind, geometry included
    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
        self.coords = shape_coords(kind);
    }

    /// The minimum y offset, used by callers centering a piece preview
    pub fn min_y(&self) -> i32 {
        self.coords.iter().map(|&(_, y)| y).min().unwrap_or(0)
    }

    /// Produce a candidate of this piece rotated 90 degrees clockwise about
    /// its origin. `O` is fixed by rule, rotation hands back an equal piece.
    pub fn rotate_cw(&self) -> Piece {
        if self.kind == ShapeKind::O {
            return self.clone();
        }
        self.transform(|(x, y)| (y, -x))
    }

    /// Produce a candidate of this piece rotated 90 degrees counterclockwise
    /// about its origin. `O` is fixed by rule.
    pub fn rotate_ccw(&self) -> Piece {
        if self.kind == ShapeKind::O {
            return self.clone();
        }
        self.transform(|(x, y)| (-y, x))
    }

    fn transform(&self, f: impl Fn(CellOffset) -> CellOffset) -> Piece {
        let mut result = self.clone();
        for coord in &mut result.coords {
            *coord = f(*coord);
        }
        result
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::new(ShapeKind::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PLAYABLE_KINDS;

    #[test]
    fn test_catalog_rests_on_x_axis() {
        for kind in PLAYABLE_KINDS {
            let min_y = shape_coords(kind).iter().map(|&(_, y)| y).min().unwrap();
            assert_eq!(min_y, 0, "{:?} should have min y offset 0", kind);
        }
    }

    #[test]
    fn test_catalog_none_is_all_origin() {
        assert_eq!(shape_coords(ShapeKind::None), [(0, 0); 4]);
    }

    #[test]
    fn test_catalog_playable_cells_are_distinct() {
        for kind in PLAYABLE_KINDS {
            let coords = shape_coords(kind);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(coords[i], coords[j], "{:?} has duplicate cells", kind);
                }
            }
        }
    }

    #[test]
    fn test_catalog_returns_fresh_copies() {
        let mut a = shape_coords(ShapeKind::T);
        a[0] = (9, 9);
        assert_ne!(a, shape_coords(ShapeKind::T));
    }

    #[test]
    fn test_piece_default_is_none() {
        let piece = Piece::default();
        assert_eq!(piece.kind(), ShapeKind::None);
        assert_eq!(*piece.coords(), [(0, 0); 4]);
    }

    #[test]
    fn test_set_kind_replaces_geometry() {
        let mut piece = Piece::new(ShapeKind::I);
        piece.set_kind(ShapeKind::None);
        assert_eq!(piece.kind(), ShapeKind::None);
        assert_eq!(*piece.coords(), [(0, 0); 4]);

        piece.set_kind(ShapeKind::S);
        assert_eq!(*piece.coords(), shape_coords(ShapeKind::S));
    }

    #[test]
    fn test_rotation_is_pure() {
        let piece = Piece::new(ShapeKind::L);
        let before = piece.coords().clone();
        let _ = piece.rotate_cw();
        let _ = piece.rotate_ccw();
        assert_eq!(*piece.coords(), before);
    }

    #[test]
    fn test_rotate_cw_then_ccw_is_identity() {
        for kind in PLAYABLE_KINDS {
            let piece = Piece::new(kind);
            assert_eq!(piece.rotate_cw().rotate_ccw(), piece);
            assert_eq!(piece.rotate_ccw().rotate_cw(), piece);
        }
    }

    #[test]
    fn test_four_cw_rotations_are_identity() {
        for kind in PLAYABLE_KINDS {
            let piece = Piece::new(kind);
            let spun = piece.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            assert_eq!(spun, piece);
        }
    }

    #[test]
    fn test_o_piece_never_rotates() {
        let piece = Piece::new(ShapeKind::O);
        assert_eq!(piece.rotate_cw(), piece);
        assert_eq!(piece.rotate_ccw(), piece);
    }

    #[test]
    fn test_rotation_preserves_kind() {
        let piece = Piece::new(ShapeKind::Z);
        assert_eq!(piece.rotate_cw().kind(), ShapeKind::Z);
        assert_eq!(piece.rotate_ccw().kind(), ShapeKind::Z);
    }

    #[test]
    fn test_vertical_i_rotates_flat() {
        // I spawns vertical; one clockwise turn lays it along the x axis.
        let flat = Piece::new(ShapeKind::I).rotate_cw();
        assert_eq!(*flat.coords(), [(3, 0), (2, 0), (1, 0), (0, 0)]);
    }
}
