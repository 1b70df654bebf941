use crate::core::{DragState, SceneState};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Orbit the camera while the primary pointer is dragged over the canvas and
/// zoom it with the wheel.
pub fn wire_orbit_drag(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneState>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));
    // Let pointer moves reach us instead of scrolling/zooming on touch screens
    _ = canvas.style().set_property("touch-action", "none");

    {
        let drag = drag.clone();
        let canvas_down = canvas.clone();
        dom::add_listener(canvas.as_ref(), "pointerdown", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            if !input::is_primary_drag(ev) {
                return;
            }
            _ = canvas_down.set_pointer_capture(ev.pointer_id());
            let at = input::pointer_canvas_css(ev, &canvas_down);
            drag.borrow_mut().begin(ev.pointer_id(), at);
        });
    }
    {
        let drag = drag.clone();
        let scene = scene.clone();
        let canvas_move = canvas.clone();
        dom::add_listener(canvas.as_ref(), "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let at = input::pointer_canvas_css(ev, &canvas_move);
            let delta = drag.borrow_mut().advance(ev.pointer_id(), at);
            if let Some([dx, dy]) = delta {
                scene.borrow_mut().drag_camera(dx, dy);
            }
        });
    }
    dom::add_listener(canvas.as_ref(), "wheel", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        // Zoom the scene instead of scrolling the page under the canvas
        ev.prevent_default();
        scene.borrow_mut().zoom_camera(ev.delta_y() as f32);
    });
    for event in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let canvas_up = canvas.clone();
        dom::add_listener(canvas.as_ref(), event, move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            _ = canvas_up.release_pointer_capture(ev.pointer_id());
            drag.borrow_mut().end(ev.pointer_id());
        });
    }
}
