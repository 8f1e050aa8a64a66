//! Catalog module - the fixed set of polyomino shapes and the sampler
//!
//! Shapes are immutable offset lists into static tables, so the catalog can be
//! shared freely and no entry can ever be mutated through a hand or a grid.
//!
//! ```text
//! BarH3  ###     BarV3  #    Square ##    Tee ###
//!                       #           ##         #
//!                       #
//!
//! ElRight #.     ElLeft .#   BarH4 ####   BarV4 #
//!         #.            .#                      #
//!         ##            ##                      #
//!                                               #
//! ```

use std::fmt;

use crate::rng::SimpleRng;
use crate::types::{ShapeKind, SHAPE_COUNT};

/// Offset of a single occupied cell relative to the shape origin, as `(dy, dx)`
pub type CellOffset = (u8, u8);

const BAR_H3: [CellOffset; 3] = [(0, 0), (0, 1), (0, 2)];
const BAR_V3: [CellOffset; 3] = [(0, 0), (1, 0), (2, 0)];
const SQUARE: [CellOffset; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const TEE: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (1, 1)];
const EL_RIGHT: [CellOffset; 4] = [(0, 0), (1, 0), (2, 0), (2, 1)];
const EL_LEFT: [CellOffset; 4] = [(0, 1), (1, 1), (2, 0), (2, 1)];
const BAR_H4: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (0, 3)];
const BAR_V4: [CellOffset; 4] = [(0, 0), (1, 0), (2, 0), (3, 0)];

/// An immutable polyomino mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    cells: &'static [CellOffset],
    height: u8,
    width: u8,
}

impl Shape {
    /// Build a shape from an offset table; the bounding box is derived from the offsets.
    pub const fn new(kind: ShapeKind, cells: &'static [CellOffset]) -> Self {
        let mut height = 0u8;
        let mut width = 0u8;
        let mut i = 0;
        while i < cells.len() {
            let (dy, dx) = cells[i];
            if dy + 1 > height {
                height = dy + 1;
            }
            if dx + 1 > width {
                width = dx + 1;
            }
            i += 1;
        }
        Self {
            kind,
            cells,
            height,
            width,
        }
    }

    /// The catalog shape for a kind
    pub const fn of(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::BarH3 => Self::new(kind, &BAR_H3),
            ShapeKind::BarV3 => Self::new(kind, &BAR_V3),
            ShapeKind::Square => Self::new(kind, &SQUARE),
            ShapeKind::Tee => Self::new(kind, &TEE),
            ShapeKind::ElRight => Self::new(kind, &EL_RIGHT),
            ShapeKind::ElLeft => Self::new(kind, &EL_LEFT),
            ShapeKind::BarH4 => Self::new(kind, &BAR_H4),
            ShapeKind::BarV4 => Self::new(kind, &BAR_V4),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Occupied cells as `(dy, dx)` offsets
    pub fn cells(&self) -> &'static [CellOffset] {
        self.cells
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> u8 {
        self.cells.len() as u8
    }

    /// Rows spanned by the bounding box
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Columns spanned by the bounding box
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Whether the bounding-box cell `(dy, dx)` is part of the shape
    pub fn is_filled(&self, dy: u8, dx: u8) -> bool {
        self.cells.contains(&(dy, dx))
    }
}

/// Catalog validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// A shape occupies no cells at all.
    EmptyShape(ShapeKind),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyShape(kind) => {
                write!(f, "catalog shape {} has no occupied cells", kind.as_str())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The fixed, ordered set of shapes pieces are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    shapes: [Shape; SHAPE_COUNT],
}

impl PieceCatalog {
    /// Validate and wrap a set of shapes.
    pub fn new(shapes: [Shape; SHAPE_COUNT]) -> Result<Self, CatalogError> {
        if let Some(empty) = shapes.iter().find(|s| s.cells.is_empty()) {
            return Err(CatalogError::EmptyShape(empty.kind));
        }
        Ok(Self { shapes })
    }

    /// The standard eight-shape catalog.
    ///
    /// # Panics
    ///
    /// If a built-in table is empty, which is a programming error.
    pub fn standard() -> Self {
        match Self::new(ShapeKind::ALL.map(Shape::of)) {
            Ok(catalog) => catalog,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn shapes(&self) -> &[Shape; SHAPE_COUNT] {
        &self.shapes
    }

    /// Draw one shape, each catalog entry equally likely.
    pub fn sample(&self, rng: &mut SimpleRng) -> Shape {
        let i = rng.next_range(SHAPE_COUNT as u32) as usize;
        self.shapes[i]
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
