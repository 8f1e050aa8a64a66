//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the placement rules, line clearing, hand management
//! and the game session state machine. It has **no dependencies** on
//! rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical hands
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Runs in a terminal, a GUI, or headless
//! - **Fast**: Placement queries and commits never allocate
//!
//! # Module Structure
//!
//! - [`grid`]: 9x9 occupancy grid with placement checks and line clearing
//! - [`catalog`]: The eight polyomino shapes and the uniform sampler
//! - [`hand`]: The three pieces on offer
//! - [`rng`]: Seeded LCG backing the sampler
//! - [`session`]: Scoring, best score, game-over detection and events
//! - [`snapshot`]: Copyable read-only view for renderers
//! - [`store`]: Best-score persistence seam
//!
//! # Game Rules
//!
//! - A shape fits when each of its occupied cells lands inside the grid on an
//!   empty cell. Shapes are never rotated.
//! - Placing scores one point per occupied cell.
//! - Every full row and every full column is then emptied, each worth a bonus
//!   of 10. Rows and columns are judged against the same board, so a row and a
//!   column crossing each other both clear.
//! - The whole hand is redrawn after every placement.
//! - The game ends when no piece of the new hand fits anywhere.
//!
//! # Example
//!
//! ```
//! use block_puzzle_core::GameSession;
//! use block_puzzle_types::SessionState;
//!
//! let mut game = GameSession::new(12345);
//!
//! // Every catalog shape fits in the top-left corner of an empty grid.
//! let outcome = game.place_slot(0, 0, 0).unwrap();
//! assert!(outcome.cells >= 3);
//! assert_eq!(game.score(), outcome.points);
//! assert_eq!(game.state(), SessionState::Playing);
//! ```

pub mod catalog;
pub mod grid;
pub mod hand;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod store;

pub use block_puzzle_types as types;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, PieceCatalog, Shape};
pub use grid::{Blocked, ClearedLines, Grid};
pub use hand::Hand;
pub use rng::SimpleRng;
pub use session::{EventQueue, GameSession, PlaceError, PlaceOutcome};
pub use snapshot::GameSnapshot;
pub use store::{BestScoreStore, MemoryStore};
