//! Piece tests - catalog geometry and rotation rules

use tetris_core::core::{shape_coords, Piece};
use tetris_core::types::{ShapeKind, PLAYABLE_KINDS};

#[test]
fn test_catalog_geometry() {
    // The canonical offset table, shapes resting on their local x axis
    assert_eq!(shape_coords(ShapeKind::None), [(0, 0), (0, 0), (0, 0), (0, 0)]);
    assert_eq!(shape_coords(ShapeKind::I), [(0, 3), (0, 2), (0, 1), (0, 0)]);
    assert_eq!(shape_coords(ShapeKind::J), [(-1, 0), (0, 0), (0, 1), (0, 2)]);
    assert_eq!(shape_coords(ShapeKind::L), [(1, 0), (0, 0), (0, 1), (0, 2)]);
    assert_eq!(shape_coords(ShapeKind::O), [(0, 1), (1, 1), (0, 0), (1, 0)]);
    assert_eq!(shape_coords(ShapeKind::S), [(-1, 0), (0, 0), (0, 1), (1, 1)]);
    assert_eq!(shape_coords(ShapeKind::T), [(-1, 0), (0, 0), (1, 0), (0, 1)]);
    assert_eq!(shape_coords(ShapeKind::Z), [(-1, 1), (0, 1), (0, 0), (1, 0)]);
}

#[test]
fn test_piece_owns_its_geometry() {
    let mut piece = Piece::new(ShapeKind::J);
    piece.set_kind(ShapeKind::None);
    // The catalog is unaffected by piece mutation
    assert_eq!(shape_coords(ShapeKind::J), [(-1, 0), (0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_rotate_cw_maps_offsets() {
    // (x, y) -> (y, -x)
    let piece = Piece::new(ShapeKind::T);
    let rotated = piece.rotate_cw();
    assert_eq!(*rotated.coords(), [(0, 1), (0, 0), (0, -1), (1, 0)]);
}

#[test]
fn test_rotate_ccw_maps_offsets() {
    // (x, y) -> (-y, x)
    let piece = Piece::new(ShapeKind::T);
    let rotated = piece.rotate_ccw();
    assert_eq!(*rotated.coords(), [(0, -1), (0, 0), (0, 1), (-1, 0)]);
}

#[test]
fn test_rotation_round_trip_all_kinds() {
    for kind in PLAYABLE_KINDS {
        let piece = Piece::new(kind);
        assert_eq!(
            piece.rotate_cw().rotate_ccw(),
            piece,
            "{:?} cw/ccw round trip",
            kind
        );
        assert_eq!(
            piece.rotate_ccw().rotate_cw(),
            piece,
            "{:?} ccw/cw round trip",
            kind
        );
    }
}

#[test]
fn test_o_rotation_is_noop() {
    let piece = Piece::new(ShapeKind::O);
    assert_eq!(piece.rotate_cw(), piece);
    assert_eq!(piece.rotate_ccw(), piece);
}

#[test]
fn test_min_y_after_rotation() {
    // Catalog shapes rest on their axis; rotation may push offsets below it
    let vertical = Piece::new(ShapeKind::I);
    assert_eq!(vertical.min_y(), 0);
    assert_eq!(vertical.rotate_cw().min_y(), 0);
    assert_eq!(Piece::new(ShapeKind::T).rotate_cw().min_y(), -1);
}
