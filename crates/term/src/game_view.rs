//! GameView: maps a `core::GameSnapshot` plus transient UI state into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Grid, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, ScreenLayout, GRID_SIZE, HAND_SIZE, MAX_SHAPE_CELLS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Transient UI state that is not part of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud<'a> {
    /// Hand slot currently picked up
    pub selected: Option<usize>,
    /// Anchor `(row, col)` the picked-up piece is aimed at; may be off-grid
    pub cursor: (i8, i8),
    /// Short-lived announcement such as "+23"
    pub banner: Option<&'a str>,
    /// Last rejection or persistence message
    pub status: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the block puzzle.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

const PANEL_GAP: u16 = 2;
const PANEL_HEADER_H: u16 = 7;
/// Label row plus the tallest shape.
const SLOT_H: u16 = 1 + MAX_SHAPE_CELLS as u16;
const FOOTER_H: u16 = 3;

const BOARD_BG: Rgb = Rgb::new(40, 26, 14);
const GRID_DOT: Rgb = Rgb::new(123, 74, 18);
const BLOCK: Rgb = Rgb::new(139, 69, 19);
const GHOST_OK: Rgb = Rgb::new(76, 175, 80);
const GHOST_BAD: Rgb = Rgb::new(244, 67, 54);
const CURSOR_BG: Rgb = Rgb::new(90, 60, 30);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const HIGHLIGHT: Rgb = Rgb::new(240, 220, 80);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Positions of everything on screen for one viewport.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    panel_x: u16,
    slots: [Rect; HAND_SIZE],
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the board and the hand slots land for this viewport.
    ///
    /// The input layer uses this to map pointer positions; it always agrees
    /// with what [`GameView::render_into`] draws.
    pub fn layout(&self, viewport: Viewport) -> ScreenLayout {
        let g = self.geometry(viewport);
        ScreenLayout {
            board_x: g.start_x + 1,
            board_y: g.start_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            slots: g.slots,
        }
    }

    fn geometry(&self, viewport: Viewport) -> Geometry {
        let frame_w = (GRID_SIZE as u16) * self.cell_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.cell_h + 2;
        let slot_w = (MAX_SHAPE_CELLS as u16) * self.cell_w + 2;
        let slot_h = SLOT_H.max(1 + (MAX_SHAPE_CELLS as u16) * self.cell_h);

        let content_w = frame_w + PANEL_GAP + slot_w;
        let panel_h = PANEL_HEADER_H + slot_h * HAND_SIZE as u16;
        let content_h = panel_h.max(frame_h + FOOTER_H);

        let start_x = viewport.width.saturating_sub(content_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };

        let panel_x = start_x + frame_w + PANEL_GAP;
        let slots_y = start_y + PANEL_HEADER_H;
        let mut slots = [Rect::default(); HAND_SIZE];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Rect::new(panel_x, slots_y + slot_h * i as u16, slot_w, slot_h);
        }

        Geometry {
            start_x,
            start_y,
            frame_w,
            frame_h,
            panel_x,
            slots,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let g = self.geometry(viewport);
        let border = CellStyle::new(GRID_DOT, BLACK);

        fb.fill_rect(
            g.start_x + 1,
            g.start_y + 1,
            g.frame_w - 2,
            g.frame_h - 2,
            ' ',
            CellStyle::new(TEXT, BOARD_BG),
        );
        draw_border(fb, g.start_x, g.start_y, g.frame_w, g.frame_h, border);

        for row in 0..GRID_SIZE as usize {
            for col in 0..GRID_SIZE as usize {
                if snap.grid[row][col] {
                    self.fill_board_cell(fb, &g, row as u16, col as u16, '█', CellStyle::new(BLOCK, BOARD_BG));
                } else {
                    self.fill_board_cell(fb, &g, row as u16, col as u16, '·', CellStyle::new(GRID_DOT, BOARD_BG).dim());
                }
            }
        }

        if snap.playable() {
            match hud.selected.and_then(|slot| snap.hand.get(slot)) {
                Some(&kind) => self.draw_ghost(fb, &g, snap, Shape::of(kind), hud.cursor),
                None => self.draw_cursor(fb, &g, hud.cursor),
            }
        }

        self.draw_side_panel(fb, &g, snap, hud);
        self.draw_footer(fb, &g, viewport, hud);

        if !snap.playable() {
            self.draw_game_over(fb, &g, snap);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, g: &Geometry, snap: &GameSnapshot, shape: Shape, anchor: (i8, i8)) {
        let (row, col) = anchor;
        let fits = Grid::from_rows(snap.grid).can_place(&shape, row, col);
        let color = if fits { GHOST_OK } else { GHOST_BAD };
        let style = CellStyle::new(color, BOARD_BG).bold();

        for &(dy, dx) in shape.cells() {
            let r = row as i16 + dy as i16;
            let c = col as i16 + dx as i16;
            if (0..GRID_SIZE as i16).contains(&r) && (0..GRID_SIZE as i16).contains(&c) {
                self.fill_board_cell(fb, g, r as u16, c as u16, '▓', style);
            }
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, g: &Geometry, cursor: (i8, i8)) {
        let (row, col) = cursor;
        if !(0..GRID_SIZE as i8).contains(&row) || !(0..GRID_SIZE as i8).contains(&col) {
            return;
        }
        let px = g.start_x + 1 + col as u16 * self.cell_w;
        let py = g.start_y + 1 + row as u16 * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                if let Some(mut cell) = fb.get(px + dx, py + dy) {
                    cell.style.bg = CURSOR_BG;
                    fb.set(px + dx, py + dy, cell);
                }
            }
        }
    }

    fn fill_board_cell(&self, fb: &mut FrameBuffer, g: &Geometry, row: u16, col: u16, ch: char, style: CellStyle) {
        let px = g.start_x + 1 + col * self.cell_w;
        let py = g.start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, g: &Geometry, snap: &GameSnapshot, hud: &Hud<'_>) {
        if g.panel_x >= fb.width() {
            return;
        }

        let label = CellStyle::new(TEXT, BLACK).bold();
        let value = CellStyle::new(TEXT, BLACK);

        let mut y = g.start_y;
        fb.put_str(g.panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(g.panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(g.panel_x, y, "BEST", label);
        y += 1;
        let end = fb.put_u32(g.panel_x, y, snap.best_score, value);
        if !snap.best_persisted {
            fb.put_str(end + 1, y, "not saved", CellStyle::new(GHOST_BAD, BLACK).dim());
        }
        y += 2;

        fb.put_str(g.panel_x, y, "HAND", label);

        for (i, (&kind, rect)) in snap.hand.iter().zip(g.slots.iter()).enumerate() {
            let selected = hud.selected == Some(i);
            let tag = if selected {
                CellStyle::new(BLACK, HIGHLIGHT).bold()
            } else {
                CellStyle::new(TEXT, BLACK).dim()
            };
            fb.put_char(rect.x, rect.y, if selected { '>' } else { ' ' }, tag);
            fb.put_u32(rect.x + 1, rect.y, i as u32 + 1, tag);

            let block = if selected {
                CellStyle::new(HIGHLIGHT, BLACK)
            } else {
                CellStyle::new(BLOCK, BLACK)
            };
            let shape = Shape::of(kind);
            for &(dy, dx) in shape.cells() {
                let px = rect.x + 1 + dx as u16 * self.cell_w;
                let py = rect.y + 1 + dy as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', block);
            }
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, g: &Geometry, viewport: Viewport, hud: &Hud<'_>) {
        let y = g.start_y + g.frame_h;
        if let Some(banner) = hud.banner {
            let w = banner.chars().count() as u16;
            let x = g.start_x + g.frame_w.saturating_sub(w) / 2;
            fb.put_str(x, y, banner, CellStyle::new(HIGHLIGHT, BLACK).bold());
        }
        if let Some(status) = hud.status {
            fb.put_str(g.start_x, y + 1, status, CellStyle::new(GHOST_BAD, BLACK));
        }

        let hint_y = viewport.height.saturating_sub(1);
        if hint_y > y + 1 {
            fb.put_str(
                g.start_x,
                hint_y,
                "1-3 pick  arrows move  space place  esc drop  r restart  q quit",
                CellStyle::new(TEXT, BLACK).dim(),
            );
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, g: &Geometry, snap: &GameSnapshot) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold();
        let mid_y = g.start_y + g.frame_h / 2;

        self.put_centered(fb, g, mid_y - 2, "GAME OVER", None, style);
        self.put_centered(fb, g, mid_y - 1, "SCORE ", Some(snap.score), style);
        self.put_centered(fb, g, mid_y, "BEST ", Some(snap.best_score), style);
        self.put_centered(fb, g, mid_y + 1, "r: restart", None, CellStyle::new(TEXT, BLACK));
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        g: &Geometry,
        y: u16,
        text: &str,
        value: Option<u32>,
        style: CellStyle,
    ) {
        let w = text.chars().count() as u16 + value.map_or(0, digit_count);
        let x = g.start_x + g.frame_w.saturating_sub(w) / 2;
        let x = fb.put_str(x, y, text, style);
        if let Some(v) = value {
            fb.put_u32(x, y, v, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SessionState, ShapeKind};

    fn viewport() -> Viewport {
        Viewport::new(80, 30)
    }

    fn board_char(view: &GameView, fb: &FrameBuffer, row: u16, col: u16) -> char {
        let layout = view.layout(viewport());
        fb.get(layout.board_x + col * layout.cell_w, layout.board_y + row * layout.cell_h)
            .map(|c| c.ch)
            .unwrap_or(' ')
    }

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn layout_maps_board_cells_back() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let px = layout.board_x + 3 * layout.cell_w + 1;
        let py = layout.board_y + 7 * layout.cell_h;
        assert_eq!(layout.cell_at(px, py), (7, 3));
        assert_eq!(layout.cell_at(layout.board_x - 1, layout.board_y - 1), (-1, -1));
    }

    #[test]
    fn slots_do_not_overlap_the_board() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let board_right = layout.board_x + GRID_SIZE as u16 * layout.cell_w;
        for (i, slot) in layout.slots.iter().enumerate() {
            assert!(slot.x > board_right);
            assert_eq!(layout.slot_at(slot.x, slot.y), Some(i));
        }
    }

    #[test]
    fn occupied_cells_render_as_blocks() {
        let view = GameView::default();
        let mut snap = GameSnapshot::default();
        snap.grid[2][5] = true;
        let fb = view.render(&snap, &Hud::default(), viewport());
        assert_eq!(board_char(&view, &fb, 2, 5), '█');
        assert_eq!(board_char(&view, &fb, 0, 0), '·');
    }

    #[test]
    fn ghost_color_tracks_fit() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let mut snap = GameSnapshot::default();
        snap.hand = [ShapeKind::BarH3, ShapeKind::Square, ShapeKind::Tee];

        let hud = Hud {
            selected: Some(0),
            cursor: (4, 0),
            ..Hud::default()
        };
        let fb = view.render(&snap, &hud, viewport());
        let cell = fb.get(layout.board_x, layout.board_y + 4).unwrap();
        assert_eq!(cell.ch, '▓');
        assert_eq!(cell.style.fg, GHOST_OK);

        snap.grid[4][2] = true;
        let fb = view.render(&snap, &hud, viewport());
        let cell = fb.get(layout.board_x, layout.board_y + 4).unwrap();
        assert_eq!(cell.style.fg, GHOST_BAD);
    }

    #[test]
    fn ghost_hanging_off_the_board_is_red_and_clipped() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let mut snap = GameSnapshot::default();
        snap.hand = [ShapeKind::BarH4, ShapeKind::Square, ShapeKind::Tee];

        let hud = Hud {
            selected: Some(0),
            cursor: (0, 7),
            ..Hud::default()
        };
        let fb = view.render(&snap, &hud, viewport());
        let cell = fb.get(layout.board_x + 7 * layout.cell_w, layout.board_y).unwrap();
        assert_eq!(cell.style.fg, GHOST_BAD);
        // Border column just past the grid is untouched.
        let border = fb.get(layout.board_x + 9 * layout.cell_w, layout.board_y).unwrap();
        assert_eq!(border.ch, '│');
    }

    #[test]
    fn panel_shows_scores() {
        let view = GameView::default();
        let mut snap = GameSnapshot::default();
        snap.score = 123;
        snap.best_score = 4567;
        let fb = view.render(&snap, &Hud::default(), viewport());

        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
        assert!(all.contains("SCORE"));
        assert!(all.contains("123"));
        assert!(all.contains("4567"));
        assert!(!all.contains("not saved"));

        snap.best_persisted = false;
        let fb = view.render(&snap, &Hud::default(), viewport());
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
        assert!(all.contains("not saved"));
    }

    #[test]
    fn game_over_overlay_hides_ghost() {
        let view = GameView::default();
        let layout = view.layout(viewport());
        let mut snap = GameSnapshot::default();
        snap.state = SessionState::GameOver;
        snap.score = 42;
        snap.best_score = 99;

        let hud = Hud {
            selected: Some(0),
            cursor: (0, 0),
            ..Hud::default()
        };
        let fb = view.render(&snap, &hud, viewport());
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
        assert!(all.contains("GAME OVER"));
        assert!(all.contains("SCORE 42"));
        assert!(all.contains("BEST 99"));
        assert_ne!(fb.get(layout.board_x, layout.board_y).unwrap().ch, '▓');
    }

    #[test]
    fn banner_and_status_are_drawn() {
        let view = GameView::default();
        let snap = GameSnapshot::default();
        let hud = Hud {
            banner: Some("+10"),
            status: Some("does not fit"),
            ..Hud::default()
        };
        let fb = view.render(&snap, &hud, viewport());
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n");
        assert!(all.contains("+10"));
        assert!(all.contains("does not fit"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let snap = GameSnapshot::default();
        let hud = Hud {
            selected: Some(2),
            cursor: (8, 8),
            ..Hud::default()
        };
        let fb = view.render(&snap, &hud, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
        let fb = view.render(&snap, &hud, Viewport::new(0, 0));
        assert!(fb.cells().is_empty());
    }
}
