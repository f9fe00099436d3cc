use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners owned by one mount. Dropping the registry detaches them.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    /// Attach `handler` for `kind` events on `target`, downcasting each event
    /// to `E`. Events of another type are ignored.
    pub fn add<E>(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: impl FnMut(E) + 'static,
    ) where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);

        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("[events] could not listen for {}: {:?}", kind, e);
            return;
        }
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn remove_all(&mut self) {
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}
