//! Block puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates as `block_puzzle::{core,input,term,types}`
//! and adds the pieces that tie them into a program: the on-disk best-score
//! store, command-line configuration, and the input/session/view glue.

pub use block_puzzle_core as core;
pub use block_puzzle_input as input;
pub use block_puzzle_term as term;
pub use block_puzzle_types as types;

pub mod app;
pub mod config;
pub mod store;

pub use app::App;
pub use config::{Cli, Config, StoreChoice};
pub use store::JsonFileStore;
