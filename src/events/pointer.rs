use super::{Listeners, Wiring};
use crate::input;
use web_sys as web;

// Mouse path. The tracker itself drops these while a touch is active, which
// filters the synthetic mouse events browsers emit after a tap.

pub fn wire_mouse(w: &Wiring, listeners: &mut Listeners) {
    wire_mousemove(w, listeners);
    wire_mouseleave(w, listeners);
}

fn wire_mousemove(w: &Wiring, listeners: &mut Listeners) {
    let state = w.state.clone();
    let canvas = w.canvas.clone();
    listeners.add(w.window.as_ref(), "mousemove", true, move |ev: web::MouseEvent| {
        let pos = input::mouse_local(&ev, &canvas);
        state.borrow_mut().pointer.mouse_move(pos);
    });
}

fn wire_mouseleave(w: &Wiring, listeners: &mut Listeners) {
    let Some(root) = w.document.document_element() else {
        return;
    };
    let state = w.state.clone();
    listeners.add(root.as_ref(), "mouseleave", true, move |_: web::MouseEvent| {
        state.borrow_mut().pointer.mouse_leave();
    });
}
