use crate::core::{FrameLoop, FrameTick, InstantClock, SceneState};
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedGpu = Rc<RefCell<Option<render::GpuState<'static>>>>;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: SharedGpu,
    pub frame_loop: FrameLoop<InstantClock>,
}

impl FrameContext {
    /// One animation frame. Returns false once the loop has been stopped.
    pub fn frame(&mut self) -> bool {
        let Some(tick) = self.frame_loop.tick() else {
            return false;
        };
        let scene = {
            let mut scene = self.scene.borrow_mut();
            scene.advance_frame();
            scene
        };
        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
        log_heartbeat(tick, &scene);
        true
    }
}

fn log_heartbeat(tick: FrameTick, scene: &SceneState) {
    if tick.index > 0 && tick.index % 600 == 0 {
        log::debug!(
            "[frame] #{} dt={:.1}ms elapsed={:.1} scroll={:.0}",
            tick.index,
            tick.dt.as_secs_f32() * 1000.0,
            scene.clock().elapsed(),
            scene.scroll().offset()
        );
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &RefCell<SceneState>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` chain.
#[derive(Clone)]
pub struct LoopHandle {
    frame_ctx: Rc<RefCell<FrameContext>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: RafClosure,
}

impl LoopHandle {
    /// Halt without tearing down; `resume` picks up where it left off.
    pub fn pause(&self) {
        if self.frame_ctx.borrow_mut().frame_loop.pause() {
            self.cancel_pending();
        }
    }

    pub fn resume(&self) {
        if self.frame_ctx.borrow_mut().frame_loop.start() {
            request_frame(&self.tick, &self.raf_id);
        }
    }

    fn cancel_pending(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }

    /// Stop the loop and cancel the pending frame request.
    pub fn stop(&self) {
        self.frame_ctx.borrow_mut().frame_loop.stop();
        self.cancel_pending();
        // Break the closure's reference cycle
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &RafClosure, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: RafClosure = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let handle = LoopHandle {
        frame_ctx: frame_ctx.clone(),
        raf_id: raf_id.clone(),
        tick: tick.clone(),
    };
    if !frame_ctx.borrow_mut().frame_loop.start() {
        log::warn!("[frame] loop already started or stopped");
        return handle;
    }

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        if frame_ctx.borrow_mut().frame() {
            request_frame(&tick_clone, &raf_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);
    handle
}
