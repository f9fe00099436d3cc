use crate::frame::BackdropState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod listeners;
pub mod pointer;
pub mod touch;
pub mod window;

pub use listeners::Listeners;

#[derive(Clone)]
pub struct Wiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<BackdropState>>,
}

/// Attach every input listener the backdrop needs.
pub fn wire_input_handlers(w: &Wiring) -> Listeners {
    let mut listeners = Listeners::default();
    pointer::wire_mouse(w, &mut listeners);
    touch::wire_touch(w, &mut listeners);
    window::wire_resize(w, &mut listeners);
    window::wire_scroll(w, &mut listeners);
    listeners
}
