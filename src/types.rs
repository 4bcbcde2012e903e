//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

use serde::{Deserialize, Serialize};

/// Canonical board dimensions (Gameboy Tetris is 10x18)
pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 18;

/// One-sided tetromino kinds plus the empty sentinel.
///
/// `None` doubles as "empty cell" on the board and "no active piece" in the
/// game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    None,
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// The seven playable kinds, in catalog order
pub const PLAYABLE_KINDS: [ShapeKind; 7] = [
    ShapeKind::I,
    ShapeKind::J,
    ShapeKind::L,
    ShapeKind::O,
    ShapeKind::S,
    ShapeKind::T,
    ShapeKind::Z,
];

impl ShapeKind {
    /// Convert to lowercase string (for logs and display)
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::None => "none",
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }

    /// Parse kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(ShapeKind::None),
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// True for the empty sentinel
    pub fn is_none(&self) -> bool {
        matches!(self, ShapeKind::None)
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        ShapeKind::None
    }
}
