//! Pointer and scroll input shared between event handlers and the frame.
//!
//! Pointer coordinates are kept canvas-local (viewport space). They are
//! converted to document space only when a frame consumes them, so scrolling
//! never needs to patch a cached position.

use crate::constants::TOUCH_RELEASE_DELAY_MS;
use glam::Vec2;

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
    touch_active: bool,
    release_at_ms: Option<f64>,
}

impl PointerTracker {
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Pointer position in document space for the given scroll offset.
    pub fn document_position(&self, scroll_y: f32) -> Option<Vec2> {
        self.position.map(|p| Vec2::new(p.x, p.y + scroll_y))
    }

    pub fn touch_active(&self) -> bool {
        self.touch_active
    }

    pub fn release_pending(&self) -> bool {
        self.release_at_ms.is_some()
    }

    /// Mouse move. Synthetic mouse events fired during a touch are dropped.
    pub fn mouse_move(&mut self, local: Vec2) {
        if !self.touch_active {
            self.position = Some(local);
        }
    }

    pub fn mouse_leave(&mut self) {
        if !self.touch_active {
            self.position = None;
        }
    }

    /// A new touch cancels any release still waiting from the previous one.
    pub fn touch_start(&mut self, local: Vec2) {
        self.touch_active = true;
        self.release_at_ms = None;
        self.position = Some(local);
    }

    pub fn touch_move(&mut self, local: Vec2) {
        if self.touch_active {
            self.position = Some(local);
        }
    }

    pub fn touch_end(&mut self, now_ms: f64) {
        if self.touch_active {
            self.release_at_ms = Some(now_ms + TOUCH_RELEASE_DELAY_MS);
        }
    }

    /// Apply a due touch release. Returns true when the pointer was cleared.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.release_at_ms {
            Some(due) if now_ms >= due => {
                self.release_at_ms = None;
                self.touch_active = false;
                self.position = None;
                true
            }
            _ => false,
        }
    }
}

/// Last seen page scroll offset and the delta from the one before it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    pub offset: f32,
    pub delta: f32,
}

impl ScrollTracker {
    pub fn update(&mut self, offset: f32) -> f32 {
        self.delta = offset - self.offset;
        self.offset = offset;
        self.delta
    }
}
