// Scene state and the animator operations that mutate it.
//
// One `SceneState` is owned by the top-level driver. The frame loop calls
// `advance_frame`; scroll, resize and intro events arrive through the
// `SceneController` and land in `on_scroll`, `on_resize` and
// `complete_intro`.

use glam::Mat4;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::assets::{AssetRequest, AssetTracker};
use super::camera::{CameraPose, Projection, Viewport};
use super::clock::SceneClock;
use super::config::SceneConfig;
use super::controls::OrbitControls;
use super::model::SceneModel;
use super::scroll::{map_scroll, LayerTransform, ScrollState};
use super::starfield::Starfield;

pub struct SceneState {
    config: SceneConfig,
    clock: SceneClock,
    starfield: Starfield,
    scroll: ScrollState,
    camera: CameraPose,
    projection: Projection,
    layer: LayerTransform,
    models: Vec<SceneModel>,
    controls: Option<OrbitControls>,
    viewport: Option<Viewport>,
    pub assets: AssetTracker,
}

impl SceneState {
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let starfield = Starfield::generate(&config.starfield, &mut rng);
        let models = config
            .models
            .iter()
            .cloned()
            .map(SceneModel::new)
            .collect::<Vec<_>>();
        let controls = config
            .orbit_controls
            .then(|| OrbitControls::new(config.camera.position, glam::Vec3::ZERO));
        log::info!(
            "[scene] preset={} stars={} models={} mappings={}",
            config.preset.name(),
            starfield.len(),
            models.len(),
            config.scroll_mappings.len()
        );
        Self {
            camera: config.camera,
            projection: config.projection,
            clock: SceneClock::default(),
            starfield,
            scroll: ScrollState::default(),
            layer: LayerTransform::default(),
            models,
            controls,
            viewport: None,
            assets: AssetTracker::default(),
            config,
        }
    }

    /// One display refresh: advance time, move and twinkle the stars, spin
    /// the models, and let orbit controls settle. Returns the elapsed time.
    pub fn advance_frame(&mut self) -> f32 {
        let elapsed = self.clock.advance();
        self.starfield.update(elapsed);
        for model in &mut self.models {
            model.update(elapsed);
        }
        if let Some(controls) = &mut self.controls {
            self.camera = controls.update();
        }
        elapsed
    }

    /// Scroll handler. A no-op until the intro completes; afterwards the
    /// camera and layer become a function of `offset` alone. Returns whether
    /// anything was applied.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        if !self.scroll.record(offset) {
            return false;
        }
        let pose = map_scroll(&self.config.scroll_mappings, &self.config.camera, offset);
        if let Some(camera) = pose.camera {
            self.camera = camera;
        }
        if let Some(layer) = pose.layer {
            self.layer = layer;
        }
        true
    }

    /// Open the intro gate. Returns true only on the first call.
    pub fn complete_intro(&mut self) -> bool {
        let opened = self.scroll.unlock();
        if opened {
            log::info!("[scene] intro complete, scroll effects unlocked");
        }
        opened
    }

    /// Reconcile the gate with a page that may have finished its intro
    /// before the scene existed. Returns whether scroll effects are live.
    pub fn sync_intro(&mut self, already_complete: bool) -> bool {
        if already_complete {
            self.complete_intro();
        }
        self.scroll.is_unlocked()
    }

    /// Update the projection for a new viewport and return the backing
    /// surface size in physical pixels.
    pub fn on_resize(&mut self, viewport: Viewport) -> (u32, u32) {
        self.projection.resize(&viewport);
        self.viewport = Some(viewport);
        viewport.surface_size()
    }

    /// Feed a pointer drag to the orbit controls, if this scene has them.
    pub fn drag_camera(&mut self, dx: f32, dy: f32) {
        let height = self.viewport.map(|v| v.css_height).unwrap_or(1.0);
        if let Some(controls) = &mut self.controls {
            controls.rotate_by_pixels(dx, dy, height);
        }
    }

    /// Every texture the scene's models ask for, in model order.
    pub fn texture_requests(&self) -> Vec<AssetRequest> {
        self.models
            .iter()
            .enumerate()
            .flat_map(|(model, m)| {
                m.desc.textures.iter().map(move |t| AssetRequest {
                    model,
                    channel: t.channel,
                    path: t.path.clone(),
                })
            })
            .collect()
    }

    /// Feed a wheel event to the orbit controls, if this scene has them.
    pub fn zoom_camera(&mut self, delta_y: f32) {
        if let Some(controls) = &mut self.controls {
            controls.zoom_by_wheel(delta_y);
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection.matrix() * self.camera.view_matrix()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }
    pub fn camera(&self) -> &CameraPose {
        &self.camera
    }
    pub fn projection(&self) -> &Projection {
        &self.projection
    }
    pub fn layer(&self) -> &LayerTransform {
        &self.layer
    }
    pub fn models(&self) -> &[SceneModel] {
        &self.models
    }
    pub fn controls(&self) -> Option<&OrbitControls> {
        self.controls.as_ref()
    }
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }
}
