use crate::dom;
use crate::events::{self, Listeners, Wiring};
use crate::frame::{self, BackdropState, FrameContext, LoopHandle};
use crate::surface::CanvasSurface;
use backdrop_core::{ParticleField, PointerTracker, ScrollTracker};
use std::cell::RefCell;
use std::rc::Rc;

/// A backdrop attached to one canvas. Dropping it stops the animation loop
/// and detaches every listener.
pub struct Backdrop {
    canvas_id: String,
    frame_loop: LoopHandle,
    listeners: Listeners,
}

pub fn mount(canvas_id: &str) -> anyhow::Result<Backdrop> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;

    let viewport = dom::canvas_viewport(&window, &canvas)
        .ok_or_else(|| anyhow::anyhow!("canvas has no usable size"))?;
    let dpr = dom::sync_canvas_backing_size(&window, &canvas, viewport);
    let scroll_y = dom::scroll_y(&window);

    let state = Rc::new(RefCell::new(BackdropState {
        field: ParticleField::from_entropy(viewport, scroll_y),
        pointer: PointerTracker::default(),
        scroll: ScrollTracker {
            offset: scroll_y,
            delta: 0.0,
        },
        surface: CanvasSurface::new(ctx, dpr, viewport),
    }));

    let listeners = events::wire_input_handlers(&Wiring {
        window: window.clone(),
        document,
        canvas,
        state: state.clone(),
    });

    let frame_loop = frame::start_loop(
        window.clone(),
        FrameContext {
            window,
            state,
            frames: 0,
        },
    );

    log::info!(
        "[mount] #{} {}x{} @{}x, {} listeners",
        canvas_id,
        viewport.width,
        viewport.height,
        dpr,
        listeners.len()
    );
    Ok(Backdrop {
        canvas_id: canvas_id.to_owned(),
        frame_loop,
        listeners,
    })
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.frame_loop.cancel();
        self.listeners.remove_all();
        log::info!("[unmount] #{}", self.canvas_id);
    }
}
