#![cfg(target_arch = "wasm32")]
use crate::constants::{BOARD_ID, CANVAS_ID, SCENE_ATTR, SEED_ATTR};
use crate::core::{
    EventKind, FrameLoop, InstantClock, SceneConfig, SceneController, SceneEvent, SceneState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod intro;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Page-side subscribers: keep the canvas, the content board and the body
/// lock in step with the scene.
fn wire_dom_subscribers(
    controller: &mut SceneController,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) {
    let canvas_resize = canvas.clone();
    controller.subscribe(EventKind::Resize, move |ev, _| {
        if let SceneEvent::Resize(viewport) = ev {
            dom::sync_canvas_size(&canvas_resize, viewport);
        }
    });

    let board = document
        .get_element_by_id(BOARD_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    match board {
        Some(board) => {
            controller.subscribe(EventKind::Scroll, move |_, state| {
                if state.scroll().is_unlocked() {
                    dom::apply_layer_transform(&board, state.layer());
                }
            });
        }
        None => log::info!("[init] no #{} element; layer transform disabled", BOARD_ID),
    }

    let document_intro = document.clone();
    controller.subscribe(EventKind::IntroComplete, move |_, _| {
        intro::unlock(&document_intro);
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = SceneConfig::from_attrs(
        canvas.get_attribute(SCENE_ATTR).as_deref(),
        canvas.get_attribute(SEED_ATTR).as_deref(),
    );
    let scene = Rc::new(RefCell::new(SceneState::new(config)));

    if scene
        .borrow_mut()
        .sync_intro(intro::is_complete(&document))
    {
        intro::unlock(&document);
    } else {
        intro::lock(&document);
    }

    let mut controller = SceneController::with_scene_handlers();
    wire_dom_subscribers(&mut controller, &document, &canvas);
    let controller = Rc::new(RefCell::new(controller));

    // Size the canvas and projection before the first frame
    let viewport = dom::window_viewport(&window);
    controller
        .borrow_mut()
        .dispatch(&SceneEvent::Resize(viewport), &mut scene.borrow_mut());

    events::wire_page_events(events::PageWiring {
        window: window.clone(),
        document: document.clone(),
        scene: scene.clone(),
        controller: controller.clone(),
    });
    if scene.borrow().controls().is_some() {
        events::wire_orbit_drag(&canvas, scene.clone());
    }

    let gpu = frame::init_gpu(&canvas, &scene).await;
    let gpu: frame::SharedGpu = Rc::new(RefCell::new(gpu));
    if gpu.borrow().is_some() {
        assets::load_scene_textures(scene.clone(), gpu.clone());
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        canvas: canvas.clone(),
        gpu,
        frame_loop: FrameLoop::new(InstantClock::default()),
    }));
    let handle = frame::start_loop(frame_ctx);

    // A page kept in the back/forward cache only pauses; anything else is
    // torn down for good
    let handle_show = handle.clone();
    dom::add_listener(window.as_ref(), "pagehide", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if persisted {
            handle.pause();
        } else {
            handle.stop();
            controller.borrow_mut().clear();
        }
    });
    dom::add_listener(window.as_ref(), "pageshow", move |ev| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if persisted {
            handle_show.resume();
        }
    });

    Ok(())
}
