//! Serializable snapshots of the engine state, for drivers that render or
//! observe the game without holding a borrow of `Game`.

use serde::{Deserialize, Serialize};

use crate::core::pieces::ShapeCoords;
use crate::types::ShapeKind;

/// The falling piece as seen by an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub coords: ShapeCoords,
    pub x: i32,
    pub y: i32,
}

/// Copyable view of the whole game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    /// Row-major cells, bottom row first
    pub board: Vec<ShapeKind>,
    /// Absent between a landing and the next spawn
    pub active: Option<ActiveSnapshot>,
    pub next: ShapeKind,
    pub started: bool,
    pub paused: bool,
    pub needs_new_piece: bool,
    pub rows_completed: u32,
}

impl GameSnapshot {
    /// Cell contents at (x, y), bottom-origin like `Board`
    pub fn cell(&self, x: i32, y: i32) -> ShapeKind {
        assert!(
            x >= 0 && x < self.width && y >= 0 && y < self.height,
            "cell ({x}, {y}) outside {}x{} snapshot",
            self.width,
            self.height
        );
        self.board[(y * self.width + x) as usize]
    }

    /// True while the driver should keep its gravity timer running
    pub fn playable(&self) -> bool {
        self.started && !self.paused
    }
}
