use web_sys as web;

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    [
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    ]
}

/// Only primary-button mouse drags and touch/pen contacts steer the camera.
#[inline]
pub fn is_primary_drag(ev: &web::PointerEvent) -> bool {
    ev.is_primary() && (ev.pointer_type() != "mouse" || ev.button() == 0)
}
