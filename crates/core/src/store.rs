//! Best-score persistence seam.
//!
//! The session only needs to load one integer at startup and save it whenever
//! it grows. Implementations may fail; the session treats a failed load as 0
//! and a failed save as "not persisted" without interrupting play.

use std::io;

pub trait BestScoreStore {
    fn load_best_score(&mut self) -> io::Result<u32>;
    fn save_best_score(&mut self, score: u32) -> io::Result<()>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best: u32,
    saves: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best, saves: 0 }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// How many times the session wrote to this store
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best_score(&mut self) -> io::Result<u32> {
        Ok(self.best)
    }

    fn save_best_score(&mut self, score: u32) -> io::Result<()> {
        self.best = score;
        self.saves += 1;
        Ok(())
    }
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load_best_score(&mut self) -> io::Result<u32> {
        (**self).load_best_score()
    }

    fn save_best_score(&mut self, score: u32) -> io::Result<()> {
        (**self).save_best_score(score)
    }
}
