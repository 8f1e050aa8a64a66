//! Redraw pacing for a board that only changes on input.

use crate::core::GameSnapshot;
use crate::game_view::Hud;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false` (a drag is in progress): always render.
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        if !self.has_rendered {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if !is_static || fingerprint != self.last_fingerprint {
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

fn fnv1a64(mut h: u64, bytes: impl IntoIterator<Item = u8>) -> u64 {
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// FNV-1a over everything the view draws.
pub fn frame_fingerprint(snap: &GameSnapshot, hud: &Hud<'_>) -> u64 {
    let mut h = FNV_OFFSET;
    h = fnv1a64(h, snap.grid.iter().flat_map(|row| row.iter().map(|&c| c as u8)));
    h = fnv1a64(h, snap.hand.iter().map(|k| k.index() as u8));
    h = fnv1a64(h, snap.score.to_le_bytes());
    h = fnv1a64(h, snap.best_score.to_le_bytes());
    h = fnv1a64(h, [snap.state as u8, snap.best_persisted as u8]);

    h = fnv1a64(h, [hud.selected.map_or(u8::MAX, |s| s as u8)]);
    h = fnv1a64(h, [hud.cursor.0 as u8, hud.cursor.1 as u8]);
    h = fnv1a64(h, hud.banner.unwrap_or("").bytes());
    h = fnv1a64(h, [0xff]);
    fnv1a64(h, hud.status.unwrap_or("").bytes())
}
