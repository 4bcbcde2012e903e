//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell holds the kind of
//! whichever piece landed there, or `ShapeKind::None` when empty. Cells are
//! stored row-major with (x, y) going right and up, so row 0 is the bottom
//! edge. The canonical instance is 10x18.
//!
//! Cell accessors panic on out-of-range coordinates; callers are expected to
//! pre-validate with `check_position`. Cells above the visible top edge are
//! tolerated by the placement checks so that tall pieces can spawn partly
//! off-grid.

use arrayvec::ArrayVec;
use log::debug;

use crate::core::pieces::Piece;
use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<ShapeKind>,
}

impl Board {
    /// Create an empty board of the given dimensions
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 1 && height >= 1, "degenerate board {width}x{height}");
        Self {
            width,
            height,
            cells: vec![ShapeKind::None; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Calculate flat index from (x, y), panicking out of range
    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            x >= 0 && x < self.width && y >= 0 && y < self.height,
            "cell ({x}, {y}) outside {}x{} board",
            self.width,
            self.height
        );
        (y * self.width + x) as usize
    }

    /// Get cell contents at (x, y). Out-of-range coordinates are a caller
    /// bug and panic.
    pub fn get(&self, x: i32, y: i32) -> ShapeKind {
        self.cells[self.index(x, y)]
    }

    /// Set cell contents at (x, y). Out-of-range coordinates panic.
    pub fn set(&mut self, x: i32, y: i32, kind: ShapeKind) {
        let idx = self.index(x, y);
        self.cells[idx] = kind;
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(ShapeKind::None);
    }

    /// Raw row-major cell slice, bottom row first
    pub fn cells(&self) -> &[ShapeKind] {
        &self.cells
    }

    /// Check the validity of placing a piece with its origin at (x, y).
    ///
    /// Cells above the top edge are excluded from the check (spawn
    /// tolerance), but a piece whose cells are all above the board is
    /// invalid. Every remaining cell must be inside the side and bottom
    /// walls and currently empty.
    pub fn check_position(&self, piece: &Piece, x: i32, y: i32) -> bool {
        let cells: ArrayVec<(i32, i32), 4> = piece
            .coords()
            .iter()
            .map(|&(px, py)| (px + x, py + y))
            .filter(|&(_, cy)| cy < self.height)
            .collect();
        if cells.is_empty() {
            debug!("check_position: {} fully above the board", piece.kind().as_str());
            return false;
        }
        if !cells.iter().all(|&(cx, cy)| cx >= 0 && cx < self.width && cy >= 0) {
            debug!(
                "check_position: {} at ({x}, {y}) crosses the board boundary",
                piece.kind().as_str()
            );
            return false;
        }
        if cells.iter().any(|&(cx, cy)| self.get(cx, cy) != ShapeKind::None) {
            debug!(
                "check_position: {} at ({x}, {y}) collides",
                piece.kind().as_str()
            );
            return false;
        }
        true
    }

    /// Fix a piece at (x, y), writing its kind into the grid. Assumes the
    /// corresponding `check_position` returned true; cells at or above the
    /// top edge are skipped, consistent with the spawn tolerance.
    pub fn fix_position(&mut self, piece: &Piece, x: i32, y: i32) {
        for &(px, py) in piece.coords() {
            if py + y < self.height {
                self.set(px + x, py + y, piece.kind());
            }
        }
    }

    /// Check if a row has no empty cell
    fn is_row_full(&self, y: i32) -> bool {
        let start = (y * self.width) as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|kind| *kind != ShapeKind::None)
    }

    /// Remove every full row, move the rows above them down and refill the
    /// vacated top rows with empty cells. A single compaction pass: not-full
    /// rows are renumbered onto the bottom contiguous block in their
    /// original relative order.
    ///
    /// Returns the number of rows removed; the board is untouched when that
    /// is zero.
    pub fn remove_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = 0i32;

        // Scan bottom to top, keeping not-full rows packed at the bottom
        for read_y in 0..self.height {
            if self.is_row_full(read_y) {
                continue;
            }
            if write_y != read_y {
                debug!("moving row {read_y} to row {write_y}");
                let src = (read_y as usize) * width;
                let dst = (write_y as usize) * width;
                self.cells.copy_within(src..src + width, dst);
            }
            write_y += 1;
        }

        let removed = (self.height - write_y) as usize;
        if removed > 0 {
            // The compacted region ends at write_y even when only the top
            // row was full and nothing moved
            self.cells[(write_y as usize) * width..].fill(ShapeKind::None);
            debug!("{removed} full rows removed");
        }
        removed
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(9, 0), 9);
        assert_eq!(board.index(0, 1), 10);
        assert_eq!(board.index(9, 17), 179);
    }

    #[test]
    fn test_set_reflected_in_flat_slice() {
        let mut board = Board::default();
        board.set(5, 10, ShapeKind::T);
        assert_eq!(board.cells()[10 * 10 + 5], ShapeKind::T);
    }

    #[test]
    #[should_panic]
    fn test_degenerate_dimensions_rejected() {
        let _ = Board::new(0, 18);
    }
}
