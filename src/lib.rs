#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mount;
mod surface;

thread_local! {
    // The backdrop the JS exports address; at most one per page.
    static MOUNTED: RefCell<Option<mount::Backdrop>> = const { RefCell::new(None) };
}

fn mount_into_slot(canvas_id: &str) -> anyhow::Result<()> {
    let backdrop = mount::mount(canvas_id)?;
    // Replacing an existing mount tears it down first via Drop.
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(backdrop));
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    // Without a canvas or 2D context the page simply has no backdrop.
    if let Err(e) = mount_into_slot(constants::CANVAS_ELEMENT_ID) {
        log::warn!("backdrop disabled: {:#}", e);
    }
    Ok(())
}

/// Mount onto the canvas with `canvas_id`, replacing any current backdrop.
#[wasm_bindgen]
pub fn mount_backdrop(canvas_id: &str) -> Result<(), JsValue> {
    mount_into_slot(canvas_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Stop the animation and detach listeners. Returns false if nothing was mounted.
#[wasm_bindgen]
pub fn unmount_backdrop() -> bool {
    MOUNTED.with(|slot| slot.borrow_mut().take()).is_some()
}

#[wasm_bindgen]
pub fn is_mounted() -> bool {
    MOUNTED.with(|slot| slot.borrow().is_some())
}
