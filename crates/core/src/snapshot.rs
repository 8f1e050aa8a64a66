use crate::types::{SessionState, ShapeKind, GRID_SIZE, HAND_SIZE};

/// Read-only view of a session for rendering adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[bool; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub hand: [ShapeKind; HAND_SIZE],
    pub score: u32,
    pub best_score: u32,
    pub state: SessionState,
    /// False while the most recent best-score write has failed
    pub best_persisted: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.state == SessionState::Playing
    }

    pub fn occupied(&self, row: usize, col: usize) -> bool {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[false; GRID_SIZE as usize]; GRID_SIZE as usize],
            hand: [ShapeKind::BarH3; HAND_SIZE],
            score: 0,
            best_score: 0,
            state: SessionState::Playing,
            best_persisted: true,
        }
    }
}
