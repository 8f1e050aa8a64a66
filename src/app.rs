//! Glue between input, session and view.
//!
//! `App` owns the session and everything the screen needs that the session
//! does not track: the drag state, the score banner and the last rejection
//! message. It does no I/O, so the whole interaction loop can be driven from
//! tests.

use crate::core::{BestScoreStore, GameSession, GameSnapshot, MemoryStore};
use crate::input::{DragState, Intent, PointerEvent};
use crate::term::Hud;
use crate::types::{GameAction, GameEvent, ScreenLayout, BANNER_MS, CELL_POINTS, LINE_CLEAR_BONUS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Banner {
    text: String,
    expires_at_ms: u64,
}

pub struct App<S: BestScoreStore = MemoryStore> {
    session: GameSession<S>,
    drag: DragState,
    snapshot: GameSnapshot,
    banner: Option<Banner>,
    status: Option<&'static str>,
}

impl<S: BestScoreStore> App<S> {
    pub fn new(session: GameSession<S>) -> Self {
        let snapshot = session.snapshot();
        Self {
            session,
            drag: DragState::new(),
            snapshot,
            banner: None,
            status: None,
        }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Latest snapshot; refreshed after every input.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_ref().map(|b| b.text.as_str())
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    /// A piece is following the pointer.
    pub fn dragging(&self) -> bool {
        self.drag.dragging()
    }

    pub fn hud(&self) -> Hud<'_> {
        Hud {
            selected: self.drag.selected(),
            cursor: self.drag.cursor(),
            banner: self.banner(),
            status: self.status,
        }
    }

    pub fn handle_action(&mut self, action: GameAction, now_ms: u64) {
        if let Some(intent) = self.drag.apply(action) {
            self.dispatch(intent, now_ms);
        }
        self.refresh();
    }

    pub fn handle_pointer(&mut self, layout: &ScreenLayout, event: PointerEvent, now_ms: u64) {
        if let Some(intent) = self.drag.apply_pointer(layout, event) {
            self.dispatch(intent, now_ms);
        }
        self.refresh();
    }

    /// Expire the banner.
    pub fn tick(&mut self, now_ms: u64) {
        if self.banner.as_ref().is_some_and(|b| now_ms >= b.expires_at_ms) {
            self.banner = None;
        }
    }

    fn dispatch(&mut self, intent: Intent, now_ms: u64) {
        match intent {
            Intent::Attempt(c) => match self.session.place_slot(c.slot, c.row, c.col) {
                Ok(_) => {
                    self.drag.placed();
                    self.status = None;
                }
                Err(e) => self.status = Some(e.message()),
            },
            Intent::Restart => {
                self.session.reset();
                self.status = None;
            }
        }
        self.drain_events(now_ms);
    }

    fn drain_events(&mut self, now_ms: u64) {
        let mut points = 0u32;
        let mut lines = 0u32;
        for event in self.session.take_events() {
            match event {
                GameEvent::Placed { cells, .. } => points += cells as u32 * CELL_POINTS,
                GameEvent::LinesCleared { .. } => {
                    lines += event.line_count();
                    points += event.line_count() * LINE_CLEAR_BONUS;
                }
                GameEvent::GameOver { .. } | GameEvent::Reset => {
                    self.banner = None;
                    self.drag.cancel();
                    return;
                }
            }
        }

        if points == 0 {
            return;
        }
        let text = match lines {
            0 => format!("+{points}"),
            1 => format!("+{points}  LINE CLEAR"),
            n => format!("+{points}  {n} LINES CLEAR"),
        };
        self.banner = Some(Banner {
            text,
            expires_at_ms: now_ms + BANNER_MS as u64,
        });
    }

    fn refresh(&mut self) {
        self.session.snapshot_into(&mut self.snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Hand};
    use crate::types::{Rect, SessionState, ShapeKind, GRID_SIZE};

    fn layout() -> ScreenLayout {
        ScreenLayout {
            board_x: 1,
            board_y: 1,
            cell_w: 2,
            cell_h: 1,
            slots: [
                Rect::new(24, 1, 10, 5),
                Rect::new(24, 6, 10, 5),
                Rect::new(24, 11, 10, 5),
            ],
        }
    }

    fn app_with(rows: [[bool; 9]; 9], kinds: [ShapeKind; 3]) -> App {
        App::new(GameSession::from_parts(
            Grid::from_rows(rows),
            Hand::from_kinds(kinds),
            7,
            MemoryStore::default(),
        ))
    }

    #[test]
    fn keyboard_placement_scores_and_shows_banner() {
        let mut app = app_with([[false; 9]; 9], [ShapeKind::BarH3, ShapeKind::Square, ShapeKind::Tee]);
        app.handle_action(GameAction::SelectSlot(0), 0);
        for _ in 0..GRID_SIZE {
            app.handle_action(GameAction::CursorUp, 0);
            app.handle_action(GameAction::CursorLeft, 0);
        }
        app.handle_action(GameAction::Place, 100);

        assert_eq!(app.snapshot().score, 3);
        assert!(app.snapshot().grid[0][0]);
        assert_eq!(app.banner(), Some("+3"));
        assert_eq!(app.drag().selected(), None);
        assert_eq!(app.status(), None);

        app.tick(100 + BANNER_MS as u64 - 1);
        assert!(app.banner().is_some());
        app.tick(100 + BANNER_MS as u64);
        assert_eq!(app.banner(), None);
    }

    #[test]
    fn rejected_placement_sets_status_and_keeps_selection() {
        let mut rows = [[false; 9]; 9];
        rows[4][4] = true;
        let mut app = app_with(rows, [ShapeKind::Square, ShapeKind::BarH3, ShapeKind::Tee]);

        app.handle_action(GameAction::SelectSlot(0), 0);
        app.handle_action(GameAction::Place, 0);

        assert_eq!(app.snapshot().score, 0);
        assert_eq!(app.status(), Some("shape overlaps a filled cell"));
        assert_eq!(app.drag().selected(), Some(0));
    }

    #[test]
    fn line_clear_banner_counts_lines() {
        let mut rows = [[false; 9]; 9];
        for c in 3..9 {
            rows[0][c] = true;
        }
        let mut app = app_with(rows, [ShapeKind::BarH3, ShapeKind::Square, ShapeKind::Tee]);

        let l = layout();
        app.handle_pointer(&l, PointerEvent::Down { x: 25, y: 2 }, 0);
        assert!(app.dragging());
        app.handle_pointer(&l, PointerEvent::Drag { x: 1, y: 1 }, 0);
        app.handle_pointer(&l, PointerEvent::Up { x: 1, y: 1 }, 0);

        assert_eq!(app.snapshot().score, 13);
        assert_eq!(app.banner(), Some("+13  LINE CLEAR"));
        assert!(!app.snapshot().grid[0][8]);
    }

    #[test]
    fn drop_off_the_board_is_rejected() {
        let mut app = app_with([[false; 9]; 9], [ShapeKind::BarH3, ShapeKind::Square, ShapeKind::Tee]);
        let l = layout();
        app.handle_pointer(&l, PointerEvent::Down { x: 25, y: 2 }, 0);
        app.handle_pointer(&l, PointerEvent::Up { x: 0, y: 0 }, 0);

        assert_eq!(app.status(), Some("shape would leave the grid"));
        assert_eq!(app.snapshot().score, 0);
    }

    #[test]
    fn restart_clears_board_and_keeps_best() {
        let mut app = app_with([[false; 9]; 9], [ShapeKind::BarH3, ShapeKind::Square, ShapeKind::Tee]);
        app.handle_action(GameAction::SelectSlot(1), 0);
        app.handle_action(GameAction::Place, 0);
        assert_eq!(app.snapshot().score, 4);

        app.handle_action(GameAction::Restart, 10);
        assert_eq!(app.snapshot().score, 0);
        assert_eq!(app.snapshot().best_score, 4);
        assert_eq!(app.snapshot().state, SessionState::Playing);
        assert_eq!(app.banner(), None);
        assert!(app.snapshot().grid.iter().flatten().all(|&c| !c));
    }

    #[test]
    fn hud_mirrors_drag_state() {
        let mut app = App::new(GameSession::new(3));
        app.handle_action(GameAction::SelectSlot(2), 0);
        app.handle_action(GameAction::CursorDown, 0);
        let hud = app.hud();
        assert_eq!(hud.selected, Some(2));
        assert_eq!(hud.cursor, (5, 4));
    }
}
