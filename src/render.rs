use crate::core::{MaterialChannel, SceneState, TextureData, STAR_MIN_RADIUS_PX};
use std::cell::RefCell;
use web_sys as web;

mod helpers;
mod planet;
mod stars;
mod targets;
use targets::DepthTarget;

use planet::{create_planet_resources, CameraUniforms, PlanetResources};
use stars::{create_star_resources, StarResources, StarUniforms};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    stars: StarResources,
    planets: PlanetResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// `scene` is borrowed only after the adapter and device are ready so
    /// events can still reach it while those requests are pending.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &RefCell<SceneState>,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let scene = scene.borrow();
        let depth = DepthTarget::new(&device, width, height);
        let stars = create_star_resources(&device, format, scene.starfield());
        let planets = create_planet_resources(
            &device,
            &queue,
            format,
            scene.models(),
            &scene.config().lighting,
        );
        log::info!(
            "[render] surface {}x{} {:?}, {} stars, {} planets",
            width,
            height,
            format,
            stars.count,
            planets.planets.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            stars,
            planets,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Largest texture side the device accepts.
    pub fn max_texture_dim(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    pub fn set_texture(&mut self, model: usize, channel: MaterialChannel, data: &TextureData) {
        self.planets
            .set_texture(&self.device, &self.queue, model, channel, data);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure the surface at its current size after it was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let view_proj = scene.view_projection();
        let star_uniforms = StarUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            resolution: [self.width as f32, self.height as f32],
            focal_px: scene.projection().focal_length_px(self.height as f32),
            star_radius: scene.config().star_radius,
            min_radius_px: STAR_MIN_RADIUS_PX,
            _pad: [0.0; 3],
        };
        self.queue.write_buffer(
            &self.stars.uniform_buffer,
            0,
            bytemuck::bytes_of(&star_uniforms),
        );
        self.stars.write_instances(&self.queue, scene.starfield());

        let eye = scene.camera().position;
        let camera_uniforms = CameraUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
        };
        self.queue.write_buffer(
            &self.planets.camera_buffer,
            0,
            bytemuck::bytes_of(&camera_uniforms),
        );
        self.planets.write_models(&self.queue, scene.models());

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.planets.draw(&mut rpass);
            if self.stars.count > 0 {
                rpass.set_pipeline(&self.stars.pipeline);
                rpass.set_bind_group(0, &self.stars.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.stars.instance_buffer.slice(..));
                rpass.draw(0..6, 0..self.stars.count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
