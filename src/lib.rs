//! Falling-block puzzle engine.
//!
//! This crate implements the interface-independent part of a Tetris-style
//! game: the shape catalog, the falling piece, the board grid with collision
//! and line-clear rules, and the game state machine. Rendering, input
//! mapping and timers belong to an external driver that calls the engine's
//! operations and queries its state after each mutation.

pub mod core;
pub mod types;
