//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 9x9 square:
//!
//! - **Rows**: 9 (indexed 0-8, top to bottom)
//! - **Columns**: 9 (indexed 0-8, left to right)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_POINTS` | 1 | Points per occupied cell of a placed shape |
//! | `LINE_CLEAR_BONUS` | 10 | Points per cleared row and per cleared column |
//!
//! A placement that fills 3 cells and clears one row and one column at the
//! same time is worth `3 + 10 + 10 = 23`.
//!
//! # Examples
//!
//! ```
//! use block_puzzle_types::{ShapeKind, GRID_SIZE, HAND_SIZE};
//!
//! let kind = ShapeKind::from_str("tee").unwrap();
//! assert_eq!(kind, ShapeKind::Tee);
//! assert_eq!(kind.as_str(), "tee");
//!
//! assert_eq!(GRID_SIZE, 9);
//! assert_eq!(HAND_SIZE, 3);
//! ```

/// Grid side length in cells (9 rows, 9 columns)
pub const GRID_SIZE: u8 = 9;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of pieces offered at once
pub const HAND_SIZE: usize = 3;

/// Number of shapes in the catalog
pub const SHAPE_COUNT: usize = 8;

/// Largest number of cells any catalog shape occupies
pub const MAX_SHAPE_CELLS: usize = 4;

/// Points per occupied cell of a placed shape
pub const CELL_POINTS: u32 = 1;

/// Points per cleared row and per cleared column
pub const LINE_CLEAR_BONUS: u32 = 10;

/// Identifier the best score is persisted under
pub const BEST_SCORE_KEY: &str = "highscore";

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long the score bonus banner stays on screen
pub const BANNER_MS: u32 = 1000;


/// The eight shapes of the piece catalog, in catalog order.
///
/// - **BarH3**: horizontal triple bar
/// - **BarV3**: vertical triple bar
/// - **Square**: 2x2 square
/// - **Tee**: T-tetromino, stem pointing down
/// - **ElRight**: 3 tall, foot at the bottom right
/// - **ElLeft**: 3 tall, foot at the bottom left
/// - **BarH4**: horizontal four bar
/// - **BarV4**: vertical four bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    BarH3,
    BarV3,
    Square,
    Tee,
    ElRight,
    ElLeft,
    BarH4,
    BarV4,
}

impl ShapeKind {
    /// All shape kinds in catalog order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::BarH3,
        ShapeKind::BarV3,
        ShapeKind::Square,
        ShapeKind::Tee,
        ShapeKind::ElRight,
        ShapeKind::ElLeft,
        ShapeKind::BarH4,
        ShapeKind::BarV4,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_puzzle_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("BAR4V"), Some(ShapeKind::BarV4));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bar3h" => Some(ShapeKind::BarH3),
            "bar3v" => Some(ShapeKind::BarV3),
            "square" => Some(ShapeKind::Square),
            "tee" => Some(ShapeKind::Tee),
            "elright" => Some(ShapeKind::ElRight),
            "elleft" => Some(ShapeKind::ElLeft),
            "bar4h" => Some(ShapeKind::BarH4),
            "bar4v" => Some(ShapeKind::BarV4),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::BarH3 => "bar3h",
            ShapeKind::BarV3 => "bar3v",
            ShapeKind::Square => "square",
            ShapeKind::Tee => "tee",
            ShapeKind::ElRight => "elright",
            ShapeKind::ElLeft => "elleft",
            ShapeKind::BarH4 => "bar4h",
            ShapeKind::BarV4 => "bar4v",
        }
    }

    /// Position of this kind in the catalog
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Lifecycle of a game session.
///
/// There is no pause state and no undo; `GameOver` only leaves via reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Playing,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Playing => "playing",
            SessionState::GameOver => "game_over",
        }
    }
}

/// Events emitted by the game session at its transition points.
///
/// Presentation layers (sounds, banners, animations) are a pure function of
/// this stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A shape was committed to the grid.
    Placed {
        kind: ShapeKind,
        row: i8,
        col: i8,
        cells: u8,
    },
    /// One or more lines were cleared by the last placement.
    LinesCleared { rows: u8, cols: u8 },
    /// No piece of the refilled hand fits anywhere.
    GameOver { score: u32 },
    /// The session was re-initialized.
    Reset,
}

impl GameEvent {
    /// Total cleared lines carried by a `LinesCleared` event (0 otherwise)
    pub fn line_count(&self) -> u32 {
        match self {
            GameEvent::LinesCleared { rows, cols } => *rows as u32 + *cols as u32,
            _ => 0,
        }
    }
}

/// Input actions understood by the game loop
///
/// These come from the keyboard; mouse drags are translated separately by the
/// input crate's drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the placement cursor one row up
    CursorUp,
    /// Move the placement cursor one row down
    CursorDown,
    /// Move the placement cursor one column left
    CursorLeft,
    /// Move the placement cursor one column right
    CursorRight,
    /// Pick the hand slot with the given index (0-based)
    SelectSlot(u8),
    /// Pick the next hand slot
    CycleSlot,
    /// Drop the current selection without placing
    Cancel,
    /// Attempt to place the selected piece at the cursor
    Place,
    /// Start a new game
    Restart,
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: u16, py: u16) -> bool {
        px >= self.x
            && py >= self.y
            && (px as u32) < self.x as u32 + self.w as u32
            && (py as u32) < self.y as u32 + self.h as u32
    }
}

/// Where the board and the hand slots sit on screen.
///
/// Produced by the renderer for the current viewport and consumed by the input
/// layer to translate pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Terminal column of grid cell (0, 0)
    pub board_x: u16,
    /// Terminal row of grid cell (0, 0)
    pub board_y: u16,
    /// Terminal columns per grid cell
    pub cell_w: u16,
    /// Terminal rows per grid cell
    pub cell_h: u16,
    /// Clickable area of each hand slot
    pub slots: [Rect; HAND_SIZE],
}

impl ScreenLayout {
    /// Grid cell `(row, col)` under a pointer position.
    ///
    /// Uses floor division, so positions above or left of the board map to
    /// negative cells instead of snapping to zero. Results saturate to the
    /// `i8` range.
    pub fn cell_at(&self, px: u16, py: u16) -> (i8, i8) {
        let col = floor_div(px as i32 - self.board_x as i32, self.cell_w.max(1) as i32);
        let row = floor_div(py as i32 - self.board_y as i32, self.cell_h.max(1) as i32);
        (clamp_i8(row), clamp_i8(col))
    }

    /// Hand slot under a pointer position, if any.
    pub fn slot_at(&self, px: u16, py: u16) -> Option<usize> {
        self.slots.iter().position(|r| r.contains(px, py))
    }
}

fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

fn clamp_i8(v: i32) -> i8 {
    v.clamp(i8::MIN as i32, i8::MAX as i32) as i8
}
