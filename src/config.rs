//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::core::{BestScoreStore, MemoryStore};
use crate::store::JsonFileStore;

#[derive(Debug, Parser)]
#[command(name = "block-puzzle")]
#[command(about = "9x9 block placement puzzle for the terminal")]
pub struct Cli {
    /// Seed for the piece sampler; defaults to the clock
    #[arg(long)]
    pub seed: Option<u32>,
    /// File the best score is kept in
    #[arg(long, value_name = "PATH")]
    pub best_file: Option<PathBuf>,
    /// Keep the best score in memory only
    #[arg(long, default_value_t = false, conflicts_with = "best_file")]
    pub no_persist: bool,
}

/// Where the best score lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    Memory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub store: StoreChoice,
}

impl Cli {
    /// Resolve against the environment; `clock_seed` is used when no seed was given.
    pub fn into_config(self, clock_seed: u32) -> Config {
        let store = if self.no_persist {
            StoreChoice::Memory
        } else {
            match self.best_file {
                Some(path) => StoreChoice::File(path),
                None => StoreChoice::File(JsonFileStore::from_env().path().to_path_buf()),
            }
        };
        Config {
            seed: self.seed.unwrap_or(clock_seed),
            store,
        }
    }
}

impl Config {
    pub fn open_store(&self) -> Box<dyn BestScoreStore> {
        match &self.store {
            StoreChoice::Memory => Box::new(MemoryStore::default()),
            StoreChoice::File(path) => Box::new(JsonFileStore::new(path)),
        }
    }
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
