//! Best score on disk as a small JSON document: `{"highscore": N}`.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::BestScoreStore;

/// Overrides the location of the best-score file.
pub const BEST_PATH_ENV: &str = "BLOCK_PUZZLE_BEST_PATH";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
struct BestScoreFile {
    #[serde(default)]
    highscore: u32,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::new(best_path_from(
            std::env::var_os(BEST_PATH_ENV),
            std::env::var_os("XDG_DATA_HOME"),
            std::env::var_os("HOME"),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    /// A missing file is a first run and reads as 0; an unreadable or
    /// malformed file is an error.
    fn load_best_score(&mut self) -> io::Result<u32> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };
        serde_json::from_slice::<BestScoreFile>(&bytes)
            .map(|f| f.highscore)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn save_best_score(&mut self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&BestScoreFile { highscore: score })
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}

/// Explicit path, then `$XDG_DATA_HOME`, then `$HOME/.local/share`, then the
/// working directory.
fn best_path_from(explicit: Option<OsString>, xdg_data: Option<OsString>, home: Option<OsString>) -> PathBuf {
    if let Some(explicit) = explicit.filter(|p| !p.is_empty()) {
        return PathBuf::from(explicit);
    }

    let base = xdg_data
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| PathBuf::from(home).join(".local").join("share")));

    match base {
        Some(base) => base.join("block-puzzle").join("best.json"),
        None => PathBuf::from("best.json"),
    }
}
