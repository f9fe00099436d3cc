use glam::Vec2;
use web_sys as web;

// ---------------- Coordinate helpers ----------------
// Positions handed to the pointer tracker are canvas-local CSS pixels.

#[inline]
pub fn client_to_local(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new((client_x - rect_left) as f32, (client_y - rect_top) as f32)
}

#[inline]
pub fn mouse_local(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_local(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
    )
}

/// First active touch point, if the event still carries one.
#[inline]
pub fn first_touch_local(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some(client_to_local(
        touch.client_x() as f64,
        touch.client_y() as f64,
        rect.left(),
        rect.top(),
    ))
}

#[inline]
pub fn is_large_scroll_jump(delta: f32, threshold: f32) -> bool {
    delta.is_finite() && delta.abs() > threshold
}
