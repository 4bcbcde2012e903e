//! Core module - pure game logic with no I/O
//!
//! Everything the external driver needs: the shape catalog and pieces, the
//! board grid, the game state machine, piece randomization and snapshots.

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use game::Game;
pub use pieces::{shape_coords, CellOffset, Piece, ShapeCoords};
pub use rng::{RandomShapes, ScriptedShapes, ShapeSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
