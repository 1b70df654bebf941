use crate::constants::INTRO_SELECTOR;
use crate::core::{SceneController, SceneEvent, SceneState};
use crate::dom;
use crate::intro;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PageWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub scene: Rc<RefCell<SceneState>>,
    pub controller: Rc<RefCell<SceneController>>,
}

impl PageWiring {
    fn dispatch(&self, event: SceneEvent) {
        let mut scene = self.scene.borrow_mut();
        self.controller.borrow_mut().dispatch(&event, &mut scene);
    }
}

/// Translate window scroll/resize and the intro's `animationend` into
/// scene events.
pub fn wire_page_events(w: PageWiring) {
    wire_scroll(&w);
    wire_resize(&w);
    wire_intro(&w);
}

fn wire_scroll(w: &PageWiring) {
    let wiring = w.clone();
    dom::add_listener(w.window.as_ref(), "scroll", move |_| {
        let offset = dom::scroll_offset(&wiring.window);
        wiring.dispatch(SceneEvent::Scroll { offset });
    });
}

fn wire_resize(w: &PageWiring) {
    let wiring = w.clone();
    dom::add_listener(w.window.as_ref(), "resize", move |_| {
        let viewport = dom::window_viewport(&wiring.window);
        wiring.dispatch(SceneEvent::Resize(viewport));
    });
}

fn wire_intro(w: &PageWiring) {
    match w.document.query_selector(INTRO_SELECTOR) {
        Ok(Some(intro_el)) => {
            let wiring = w.clone();
            dom::add_listener(intro_el.as_ref(), "animationend", move |_| {
                wiring.dispatch(SceneEvent::IntroComplete);
            });
            // The animation may have ended while the module was loading
            if intro::animation_finished(&intro_el) {
                log::info!("[events] intro already finished");
                w.dispatch(SceneEvent::IntroComplete);
            }
        }
        _ => {
            // Nothing will ever signal completion, so don't keep the page locked
            log::warn!("[events] no {} element; unlocking scroll now", INTRO_SELECTOR);
            w.dispatch(SceneEvent::IntroComplete);
        }
    }
}
