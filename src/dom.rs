use backdrop_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// CSS size of the canvas, falling back to the window when it has no layout yet.
pub fn canvas_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = if rect.width() > 0.0 && rect.height() > 0.0 {
        (rect.width(), rect.height())
    } else {
        let w = window.inner_width().ok()?.as_f64()?;
        let h = window.inner_height().ok()?.as_f64()?;
        (w, h)
    };
    Viewport::new(w as f32, h as f32).ok()
}

/// Size the backing store to CSS size * devicePixelRatio. Returns the ratio.
pub fn sync_canvas_backing_size(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    viewport: Viewport,
) -> f64 {
    let dpr = window.device_pixel_ratio().max(1.0);
    let w_px = (viewport.width as f64 * dpr) as u32;
    let h_px = (viewport.height as f64 * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    dpr
}
