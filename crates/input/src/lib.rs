//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game session. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! pointer events, and keeps the drag state that turns them into placement
//! attempts.

pub mod drag;
pub mod map;

pub use block_puzzle_types as types;

pub use drag::{Candidate, DragState, Intent};
pub use map::{handle_key_event, handle_mouse_event, should_quit, PointerEvent};
