//! Game module - the orchestrating state machine
//!
//! `Game` owns the board, the falling piece with its board-space anchor, the
//! queued next piece and the lifecycle flags. Every operation is synchronous
//! and either fully applies or leaves the state untouched; invalid moves are
//! boolean outcomes, not errors. An external driver supplies the cadence: a
//! gravity timer calling `step_down` and an input mapper calling the
//! movement operations, spawning via `make_new_piece` when `step_down`
//! reports a landed piece.

use log::debug;

use crate::core::board::Board;
use crate::core::pieces::Piece;
use crate::core::rng::{RandomShapes, ShapeSource};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Complete game state
#[derive(Debug)]
pub struct Game {
    board: Board,
    /// The falling piece; kind is `None` between a landing and the next spawn
    this_piece: Piece,
    /// Board-space anchor of the falling piece
    cur_x: i32,
    cur_y: i32,
    /// Drawn but not yet active
    next_piece: Piece,
    needs_new_piece: bool,
    paused: bool,
    started: bool,
    rows_completed: u32,
    shapes: Box<dyn ShapeSource>,
}

impl Game {
    /// Create a game on the canonical 10x18 board with a seeded uniform
    /// piece source. Nothing moves until `start` is called.
    pub fn new(seed: u32) -> Self {
        Self::with_source(BOARD_WIDTH, BOARD_HEIGHT, Box::new(RandomShapes::new(seed)))
    }

    /// Create a game with explicit dimensions and piece source
    pub fn with_source(width: i32, height: i32, shapes: Box<dyn ShapeSource>) -> Self {
        Self {
            board: Board::new(width, height),
            this_piece: Piece::default(),
            cur_x: 0,
            cur_y: 0,
            next_piece: Piece::default(),
            needs_new_piece: false,
            paused: false,
            started: false,
            rows_completed: 0,
            shapes,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn this_piece(&self) -> &Piece {
        &self.this_piece
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next_piece
    }

    /// Anchor of the falling piece
    pub fn position(&self) -> (i32, i32) {
        (self.cur_x, self.cur_y)
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn needs_new_piece(&self) -> bool {
        self.needs_new_piece
    }

    pub fn rows_completed(&self) -> u32 {
        self.rows_completed
    }

    /// Start (or restart) the game: reset progress, clear the board, draw a
    /// next piece and spawn it. The sole entry point back from game over.
    ///
    /// Fails without any state change while paused.
    pub fn start(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.started = true;
        self.needs_new_piece = false;
        self.rows_completed = 0;
        self.next_piece = Piece::new(self.shapes.next_kind());
        self.board.clear();
        self.make_new_piece();
        debug!("game started");
        true
    }

    /// Promote the next piece to the active slot at the spawn anchor
    /// (horizontally centered, one row below the top edge; tall pieces hang
    /// over the top thanks to the spawn tolerance).
    ///
    /// Returns false when even the spawn position collides: the active piece
    /// is cleared, `started` drops and the game is over. That is the only
    /// game-over trigger, and repeated calls keep returning false until
    /// `start` runs again.
    pub fn make_new_piece(&mut self) -> bool {
        self.needs_new_piece = false;
        let candidate = self.next_piece.clone();
        let spawn_x = self.board.width() / 2;
        let spawn_y = self.board.height() - 1;
        if self.try_position(candidate, spawn_x, spawn_y) {
            // next_piece became this_piece, replace it with a fresh draw
            self.next_piece = Piece::new(self.shapes.next_kind());
            return true;
        }
        debug!("cannot spawn at ({spawn_x}, {spawn_y}), game over");
        self.this_piece.set_kind(ShapeKind::None);
        self.started = false;
        false
    }

    /// Validate a piece at (x, y) against the board and, when valid, commit
    /// it as the falling piece with that anchor. The single commit point for
    /// every movement and rotation.
    pub fn try_position(&mut self, piece: Piece, x: i32, y: i32) -> bool {
        if self.board.check_position(&piece, x, y) {
            self.this_piece = piece;
            self.cur_x = x;
            self.cur_y = y;
            return true;
        }
        false
    }

    /// Move the falling piece one row down. A false return means the piece
    /// landed: it was fixed into the board, full rows were removed, and the
    /// caller should spawn the next piece via `make_new_piece`.
    pub fn step_down(&mut self) -> bool {
        let piece = self.this_piece.clone();
        if self.try_position(piece, self.cur_x, self.cur_y - 1) {
            return true;
        }
        self.piece_dropped();
        false
    }

    /// Move the falling piece down until it lands
    pub fn drop_down(&mut self) {
        while self.step_down() {}
        debug!("dropped piece to cur_y = {}", self.cur_y);
    }

    /// Translate the falling piece one column left
    pub fn move_left(&mut self) -> bool {
        let piece = self.this_piece.clone();
        self.try_position(piece, self.cur_x - 1, self.cur_y)
    }

    /// Translate the falling piece one column right
    pub fn move_right(&mut self) -> bool {
        let piece = self.this_piece.clone();
        self.try_position(piece, self.cur_x + 1, self.cur_y)
    }

    /// Rotate the falling piece clockwise in place, if the rotated candidate
    /// fits
    pub fn rotate_cw(&mut self) -> bool {
        let candidate = self.this_piece.rotate_cw();
        self.try_position(candidate, self.cur_x, self.cur_y)
    }

    /// Rotate the falling piece counterclockwise in place, if the rotated
    /// candidate fits
    pub fn rotate_ccw(&mut self) -> bool {
        let candidate = self.this_piece.rotate_ccw();
        self.try_position(candidate, self.cur_x, self.cur_y)
    }

    /// Toggle the pause flag and return its new value. Before `start` this
    /// is a no-op returning true.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started {
            return true;
        }
        self.paused = !self.paused;
        self.paused
    }

    /// Merge the landed piece into the board, remove full rows and flag that
    /// a new piece is due. Called only when a downward step is blocked.
    fn piece_dropped(&mut self) {
        self.board
            .fix_position(&self.this_piece, self.cur_x, self.cur_y);
        self.needs_new_piece = true;
        self.this_piece.set_kind(ShapeKind::None);
        let removed = self.board.remove_full_rows();
        debug!("{removed} rows removed");
        self.rows_completed += removed as u32;
    }

    /// Copyable view of the whole engine state for drivers and observers
    pub fn snapshot(&self) -> GameSnapshot {
        let active = if self.this_piece.kind().is_none() {
            None
        } else {
            Some(ActiveSnapshot {
                kind: self.this_piece.kind(),
                coords: *self.this_piece.coords(),
                x: self.cur_x,
                y: self.cur_y,
            })
        };
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.cells().to_vec(),
            active,
            next: self.next_piece.kind(),
            started: self.started,
            paused: self.paused,
            needs_new_piece: self.needs_new_piece,
            rows_completed: self.rows_completed,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
