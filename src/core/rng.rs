//! RNG module - seedable random piece generation
//!
//! Piece draws are isolated behind the `ShapeSource` trait so that tests can
//! inject deterministic sequences of kinds. The production source draws
//! uniformly over the seven playable kinds from a simple LCG.

use crate::types::{ShapeKind, PLAYABLE_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of the next piece kind to enter the game
pub trait ShapeSource: std::fmt::Debug {
    /// Draw the kind for the next piece; never returns `ShapeKind::None`
    fn next_kind(&mut self) -> ShapeKind;
}

/// Uniform draw over the seven playable kinds
#[derive(Debug, Clone)]
pub struct RandomShapes {
    rng: SimpleRng,
}

impl RandomShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ShapeSource for RandomShapes {
    fn next_kind(&mut self) -> ShapeKind {
        PLAYABLE_KINDS[self.rng.next_range(PLAYABLE_KINDS.len() as u32) as usize]
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted. Intended for
/// tests and replays.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    kinds: Vec<ShapeKind>,
    next: usize,
}

impl ScriptedShapes {
    /// Build from a non-empty sequence of playable kinds
    pub fn new(kinds: &[ShapeKind]) -> Self {
        assert!(!kinds.is_empty(), "scripted sequence must not be empty");
        assert!(
            kinds.iter().all(|kind| *kind != ShapeKind::None),
            "scripted sequence must hold playable kinds"
        );
        Self {
            kinds: kinds.to_vec(),
            next: 0,
        }
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
