use crate::constants::INTRO_COMPLETE_ATTR;
use crate::core::animations_finished;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hold page scrolling until the intro animation ends.
#[inline]
pub fn lock(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", "hidden");
    }
}

/// Release scrolling and mark the body so CSS can react.
#[inline]
pub fn unlock(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", "auto");
        _ = body.set_attribute(INTRO_COMPLETE_ATTR, "true");
    }
}

#[inline]
pub fn is_complete(document: &web::Document) -> bool {
    document
        .body()
        .and_then(|b| b.get_attribute(INTRO_COMPLETE_ATTR))
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Whether `el`'s CSS animations have already ended, e.g. before the wasm
/// module got to listen for `animationend`. Browsers without
/// `getAnimations` report false and rely on the event.
pub fn animation_finished(el: &web::Element) -> bool {
    let get = match js_sys::Reflect::get(el, &"getAnimations".into()) {
        Ok(f) => f,
        Err(_) => return false,
    };
    let Some(get) = get.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    let list = match get.call0(el) {
        Ok(list) => js_sys::Array::from(&list),
        Err(_) => return false,
    };
    let states: Vec<String> = list
        .iter()
        .filter_map(|a| js_sys::Reflect::get(&a, &"playState".into()).ok())
        .filter_map(|s| s.as_string())
        .collect();
    animations_finished(states.iter().map(String::as_str))
}
