//! Drag state: which hand piece is picked up and where it would land.
//!
//! This is the input adapter's only state. It never talks to the session; it
//! produces [`Intent`]s that the game loop turns into session calls.

use crate::map::PointerEvent;
use crate::types::{GameAction, ScreenLayout, GRID_SIZE, HAND_SIZE};

/// A piece from the hand aimed at a grid anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub slot: usize,
    pub row: i8,
    pub col: i8,
}

/// What the game loop should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Try to commit a placement.
    Attempt(Candidate),
    /// Start a new game.
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    selected: Option<usize>,
    row: i8,
    col: i8,
    pointer_held: bool,
}

impl DragState {
    pub fn new() -> Self {
        let mid = (GRID_SIZE / 2) as i8;
        Self {
            selected: None,
            row: mid,
            col: mid,
            pointer_held: false,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn cursor(&self) -> (i8, i8) {
        (self.row, self.col)
    }

    pub fn dragging(&self) -> bool {
        self.pointer_held && self.selected.is_some()
    }

    /// The current (slot, anchor) pair for ghost preview, if a piece is picked up
    pub fn candidate(&self) -> Option<Candidate> {
        self.selected.map(|slot| Candidate {
            slot,
            row: self.row,
            col: self.col,
        })
    }

    /// Pick up a hand piece; out-of-range slots are ignored.
    pub fn select(&mut self, slot: usize) {
        if slot < HAND_SIZE {
            self.selected = Some(slot);
        }
    }

    /// Put the piece back without placing it.
    pub fn cancel(&mut self) {
        self.selected = None;
        self.pointer_held = false;
    }

    /// Move the keyboard cursor, keeping it on the grid.
    pub fn move_cursor(&mut self, d_row: i8, d_col: i8) {
        let max = GRID_SIZE as i8 - 1;
        self.row = self.row.saturating_add(d_row).clamp(0, max);
        self.col = self.col.saturating_add(d_col).clamp(0, max);
    }

    /// Apply a keyboard action.
    pub fn apply(&mut self, action: GameAction) -> Option<Intent> {
        match action {
            GameAction::CursorUp => self.move_cursor(-1, 0),
            GameAction::CursorDown => self.move_cursor(1, 0),
            GameAction::CursorLeft => self.move_cursor(0, -1),
            GameAction::CursorRight => self.move_cursor(0, 1),
            GameAction::SelectSlot(slot) => self.select(slot as usize),
            GameAction::CycleSlot => {
                let next = self.selected.map_or(0, |s| (s + 1) % HAND_SIZE);
                self.selected = Some(next);
            }
            GameAction::Cancel => self.cancel(),
            GameAction::Place => {
                // Keyboard cursor may have been left off-grid by a pointer drag.
                self.move_cursor(0, 0);
                return self.candidate().map(Intent::Attempt);
            }
            GameAction::Restart => {
                self.cancel();
                return Some(Intent::Restart);
            }
        }
        None
    }

    /// Apply a pointer event using the current screen layout.
    ///
    /// Press on a hand slot picks it up, dragging moves the anchor to the cell
    /// under the pointer, and release attempts the placement. Releasing with
    /// nothing picked up does nothing.
    pub fn apply_pointer(&mut self, layout: &ScreenLayout, event: PointerEvent) -> Option<Intent> {
        match event {
            PointerEvent::Down { x, y } => {
                if let Some(slot) = layout.slot_at(x, y) {
                    self.select(slot);
                    self.pointer_held = true;
                } else if self.selected.is_some() {
                    self.aim(layout, x, y);
                    self.pointer_held = true;
                }
                None
            }
            PointerEvent::Drag { x, y } => {
                if self.dragging() {
                    self.aim(layout, x, y);
                }
                None
            }
            PointerEvent::Up { x, y } => {
                if !self.dragging() {
                    self.pointer_held = false;
                    return None;
                }
                self.aim(layout, x, y);
                self.pointer_held = false;
                if layout.slot_at(x, y).is_some() {
                    // Dropped back onto the hand.
                    return None;
                }
                self.candidate().map(Intent::Attempt)
            }
        }
    }

    /// Forget the picked-up piece after it was placed; the cursor stays.
    pub fn placed(&mut self) {
        self.selected = None;
        self.pointer_held = false;
    }

    fn aim(&mut self, layout: &ScreenLayout, x: u16, y: u16) {
        let (row, col) = layout.cell_at(x, y);
        self.row = row;
        self.col = col;
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}
