use super::{Listeners, Wiring};
use crate::constants::LARGE_SCROLL_JUMP_PX;
use crate::dom;
use crate::input;
use web_sys as web;

pub fn wire_resize(w: &Wiring, listeners: &mut Listeners) {
    let state = w.state.clone();
    let window = w.window.clone();
    let canvas = w.canvas.clone();
    listeners.add(w.window.as_ref(), "resize", false, move |_: web::Event| {
        let Some(viewport) = dom::canvas_viewport(&window, &canvas) else {
            return;
        };
        let dpr = dom::sync_canvas_backing_size(&window, &canvas, viewport);
        let scroll_y = dom::scroll_y(&window);
        let mut st = state.borrow_mut();
        st.surface.resize(dpr, viewport);
        if st.field.resize(viewport, scroll_y) {
            log::info!("[resize] {}x{} @{}x, reseeded", viewport.width, viewport.height, dpr);
        }
    });
}

// Frames read the scroll offset directly; this only keeps the tracker current.
pub fn wire_scroll(w: &Wiring, listeners: &mut Listeners) {
    let state = w.state.clone();
    let window = w.window.clone();
    listeners.add(w.window.as_ref(), "scroll", true, move |_: web::Event| {
        let delta = state.borrow_mut().scroll.update(dom::scroll_y(&window));
        if input::is_large_scroll_jump(delta, LARGE_SCROLL_JUMP_PX) {
            log::debug!("[scroll] jump of {:.0}px", delta);
        }
    });
}
