use super::{Listeners, Wiring};
use crate::input;
use web_sys as web;

pub fn wire_touch(w: &Wiring, listeners: &mut Listeners) {
    let state = w.state.clone();
    let canvas = w.canvas.clone();
    listeners.add(w.window.as_ref(), "touchstart", true, move |ev: web::TouchEvent| {
        if let Some(pos) = input::first_touch_local(&ev, &canvas) {
            state.borrow_mut().pointer.touch_start(pos);
        }
    });

    let state = w.state.clone();
    let canvas = w.canvas.clone();
    listeners.add(w.window.as_ref(), "touchmove", true, move |ev: web::TouchEvent| {
        if let Some(pos) = input::first_touch_local(&ev, &canvas) {
            state.borrow_mut().pointer.touch_move(pos);
        }
    });

    // The release itself is applied by the frame loop once the debounce elapses.
    for kind in ["touchend", "touchcancel"] {
        let state = w.state.clone();
        listeners.add(w.window.as_ref(), kind, true, move |ev: web::TouchEvent| {
            state.borrow_mut().pointer.touch_end(ev.time_stamp());
        });
    }
}
