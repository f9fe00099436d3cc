use crate::constants::STATS_LOG_INTERVAL_FRAMES;
use crate::dom;
use crate::surface::CanvasSurface;
use backdrop_core::{FrameInput, ParticleField, PointerTracker, ScrollTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one mount mutates: written by event handlers, read by frames.
pub struct BackdropState {
    pub field: ParticleField,
    pub pointer: PointerTracker,
    pub scroll: ScrollTracker,
    pub surface: CanvasSurface,
}

pub struct FrameContext {
    pub window: web::Window,
    pub state: Rc<RefCell<BackdropState>>,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        let scroll_y = dom::scroll_y(&self.window);
        let mut guard = self.state.borrow_mut();
        let st = &mut *guard;

        if st.pointer.poll(now_ms) {
            log::debug!("[touch] released");
        }
        let input = FrameInput {
            scroll_y,
            pointer: st.pointer.document_position(scroll_y),
        };
        let stats = st.field.frame(&input, &mut st.surface);

        self.frames += 1;
        if self.frames % STATS_LOG_INTERVAL_FRAMES == 0 {
            log::debug!(
                "[frame] #{} updated={} drawn={} haloed={} scroll={:.0}",
                self.frames,
                stats.updated,
                stats.drawn,
                stats.haloed,
                scroll_y
            );
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Running requestAnimationFrame loop. [`LoopHandle::cancel`] stops it.
pub struct LoopHandle {
    window: web::Window,
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the closure also breaks its reference cycle with the slot.
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(window: web::Window, mut frame_ctx: FrameContext) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx.frame(now_ms);
        if let Some(cb) = tick_clone.borrow().as_ref() {
            pending_tick.set(
                window_tick
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok(),
            );
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }

    LoopHandle {
        window,
        tick,
        pending,
    }
}
