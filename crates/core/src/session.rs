//! Game session module - orchestrates grid, hand and scoring
//!
//! This is the single public surface adapters talk to. Every method runs to
//! completion synchronously; a rejected placement leaves the session exactly
//! as it was and emits nothing.

use std::fmt;

use arrayvec::ArrayVec;

use crate::catalog::{PieceCatalog, Shape};
use crate::grid::{Blocked, ClearedLines, Grid};
use crate::hand::Hand;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::store::{BestScoreStore, MemoryStore};
use crate::types::*;

/// Pending events kept when adapters do not drain; the oldest is dropped first.
pub const EVENT_CAPACITY: usize = 8;

/// Queue of events returned by [`GameSession::take_events`]
pub type EventQueue = ArrayVec<GameEvent, EVENT_CAPACITY>;

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotPlaying,
    NoSuchSlot,
    NotInHand,
    OutOfBounds,
    Collision,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlaying => "not_playing",
            PlaceError::NoSuchSlot | PlaceError::NotInHand => "invalid_piece",
            PlaceError::OutOfBounds | PlaceError::Collision => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlaying => "game is over",
            PlaceError::NoSuchSlot => "hand slot does not exist",
            PlaceError::NotInHand => "shape is not in the hand",
            PlaceError::OutOfBounds => "shape would leave the grid",
            PlaceError::Collision => "shape overlaps a filled cell",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

impl From<Blocked> for PlaceError {
    fn from(value: Blocked) -> Self {
        match value {
            Blocked::OutOfBounds => PlaceError::OutOfBounds,
            Blocked::Collision => PlaceError::Collision,
        }
    }
}

/// Result of an accepted placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOutcome {
    /// Cells filled by the shape
    pub cells: u8,
    /// Lines removed right after the shape landed
    pub cleared: ClearedLines,
    /// Score gained by this move
    pub points: u32,
    /// The refilled hand has no legal placement
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<S: BestScoreStore = MemoryStore> {
    grid: Grid,
    hand: Hand,
    catalog: PieceCatalog,
    rng: SimpleRng,
    score: u32,
    best_score: u32,
    best_persisted: bool,
    state: SessionState,
    events: EventQueue,
    store: S,
}

impl GameSession<MemoryStore> {
    /// Create a new game with the given RNG seed and no persistence
    pub fn new(seed: u32) -> Self {
        Self::with_store(seed, MemoryStore::default())
    }
}

impl<S: BestScoreStore> GameSession<S> {
    /// Create a new game, loading the best score from `store`
    pub fn with_store(seed: u32, store: S) -> Self {
        let catalog = PieceCatalog::standard();
        let mut rng = SimpleRng::new(seed);
        let hand = Hand::deal(&catalog, &mut rng);
        Self::assemble(Grid::new(), hand, catalog, rng, store)
    }

    /// Resume from an existing grid and hand.
    ///
    /// The session starts in `Playing` regardless of whether a move exists;
    /// the game-over check runs after the next placement.
    pub fn from_parts(grid: Grid, hand: Hand, seed: u32, store: S) -> Self {
        Self::assemble(grid, hand, PieceCatalog::standard(), SimpleRng::new(seed), store)
    }

    fn assemble(grid: Grid, hand: Hand, catalog: PieceCatalog, rng: SimpleRng, mut store: S) -> Self {
        let best_score = store.load_best_score().unwrap_or(0);
        Self {
            grid,
            hand,
            catalog,
            rng,
            score: 0,
            best_score,
            best_persisted: true,
            state: SessionState::Playing,
            events: EventQueue::new(),
            store,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// False while the most recent best-score write has failed
    pub fn best_persisted(&self) -> bool {
        self.best_persisted
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ghost-preview query; pure.
    pub fn can_place(&self, shape: &Shape, row: i8, col: i8) -> bool {
        self.grid.can_place(shape, row, col)
    }

    /// Ghost-preview query for a hand slot; false for a missing slot.
    pub fn can_place_slot(&self, slot: usize, row: i8, col: i8) -> bool {
        self.hand
            .get(slot)
            .is_some_and(|shape| self.grid.can_place(&shape, row, col))
    }

    /// Whether any hand piece fits anywhere on the grid.
    pub fn has_any_move(&self) -> bool {
        let size = GRID_SIZE as i8;
        self.hand.pieces().iter().any(|shape| {
            (0..size).any(|row| (0..size).any(|col| self.grid.can_place(shape, row, col)))
        })
    }

    /// Place the piece held in hand slot `slot` with its top-left at (row, col).
    pub fn place_slot(&mut self, slot: usize, row: i8, col: i8) -> Result<PlaceOutcome, PlaceError> {
        let shape = self.hand.get(slot).ok_or(PlaceError::NoSuchSlot)?;
        self.place(shape, row, col)
    }

    /// Commit `shape` with its top-left at (row, col).
    ///
    /// Scores one point per filled cell plus a bonus per cleared row and per
    /// cleared column, raises the best score, refills the whole hand, then
    /// decides game over against the refilled hand.
    pub fn place(&mut self, shape: Shape, row: i8, col: i8) -> Result<PlaceOutcome, PlaceError> {
        if self.state != SessionState::Playing {
            return Err(PlaceError::NotPlaying);
        }
        if !self.hand.pieces().contains(&shape) {
            return Err(PlaceError::NotInHand);
        }

        let cells = self.grid.place(&shape, row, col)?;
        let cleared = self.grid.clear_full_lines();

        let points = cells as u32 * CELL_POINTS + cleared.count() as u32 * LINE_CLEAR_BONUS;
        self.score = self.score.saturating_add(points);

        self.emit(GameEvent::Placed {
            kind: shape.kind(),
            row,
            col,
            cells,
        });
        if !cleared.is_empty() {
            self.emit(GameEvent::LinesCleared {
                rows: cleared.rows.len() as u8,
                cols: cleared.cols.len() as u8,
            });
        }

        self.raise_best_score();

        self.hand.refill(&self.catalog, &mut self.rng);

        let game_over = !self.has_any_move();
        if game_over {
            self.state = SessionState::GameOver;
            self.emit(GameEvent::GameOver { score: self.score });
        }

        Ok(PlaceOutcome {
            cells,
            cleared,
            points,
            game_over,
        })
    }

    /// Start over: empty grid, zero score, fresh hand. Best score is kept.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.score = 0;
        self.hand.refill(&self.catalog, &mut self.rng);
        self.state = SessionState::Playing;
        self.emit(GameEvent::Reset);
    }

    /// Take and clear pending events, oldest first.
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.hand = self.hand.kinds();
        out.score = self.score;
        out.best_score = self.best_score;
        out.state = self.state;
        out.best_persisted = self.best_persisted;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn raise_best_score(&mut self) {
        if self.score <= self.best_score {
            return;
        }
        self.best_score = self.score;
        self.best_persisted = self.store.save_best_score(self.best_score).is_ok();
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

impl Default for GameSession<MemoryStore> {
    fn default() -> Self {
        Self::new(1)
    }
}
