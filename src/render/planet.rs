use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

use super::helpers;
use crate::core::{
    uv_sphere, Lighting, MaterialChannel, MeshVertex, SceneModel, TextureData,
    SPHERE_HEIGHT_SEGMENTS, SPHERE_WIDTH_SEGMENTS,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LightUniforms {
    pub(crate) position_range: [f32; 4],
    pub(crate) color_intensity: [f32; 4],
    pub(crate) ambient: [f32; 4],
}

impl LightUniforms {
    pub(crate) fn from_lighting(l: &Lighting) -> Self {
        Self {
            position_range: [
                l.point_position.x,
                l.point_position.y,
                l.point_position.z,
                l.point_range,
            ],
            color_intensity: [1.0, 1.0, 1.0, l.point_intensity],
            ambient: [l.ambient, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ModelUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal: [[f32; 4]; 4],
}

impl ModelUniforms {
    pub(crate) fn from_matrix(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

fn channel_format(channel: MaterialChannel) -> wgpu::TextureFormat {
    match channel {
        MaterialChannel::Color => wgpu::TextureFormat::Rgba8UnormSrgb,
        _ => wgpu::TextureFormat::Rgba8Unorm,
    }
}

pub(crate) struct PlanetGpu {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    model_buffer: wgpu::Buffer,
    // Indexed by `MaterialChannel::slot`
    textures: [(wgpu::Texture, wgpu::TextureView); 4],
    bind_group: wgpu::BindGroup,
}

pub(crate) struct PlanetResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) camera_buffer: wgpu::Buffer,
    pub(crate) frame_bind_group: wgpu::BindGroup,
    material_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    pub(crate) planets: Vec<PlanetGpu>,
}

impl PlanetResources {
    pub(crate) fn write_models(&self, queue: &wgpu::Queue, models: &[SceneModel]) {
        for (gpu, model) in self.planets.iter().zip(models) {
            let u = ModelUniforms::from_matrix(model.model_matrix());
            queue.write_buffer(&gpu.model_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    /// Replace one material channel of one planet and rebuild its bind group.
    pub(crate) fn set_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        model: usize,
        channel: MaterialChannel,
        data: &TextureData,
    ) {
        let Some(gpu) = self.planets.get_mut(model) else {
            log::warn!("[render] texture for unknown model {}", model);
            return;
        };
        let uploaded =
            helpers::upload_rgba_texture(device, queue, "planet_map", data, channel_format(channel));
        let (old_tex, _) = std::mem::replace(&mut gpu.textures[channel.slot()], uploaded);
        old_tex.destroy();
        gpu.bind_group = material_bind_group(
            device,
            &self.material_bgl,
            &gpu.model_buffer,
            &gpu.textures,
            &self.sampler,
        );
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.planets.is_empty() {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.frame_bind_group, &[]);
        for gpu in &self.planets {
            rpass.set_bind_group(1, &gpu.bind_group, &[]);
            rpass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
            rpass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..gpu.index_count, 0, 0..1);
        }
    }
}

fn material_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    model_buffer: &wgpu::Buffer,
    textures: &[(wgpu::Texture, wgpu::TextureView); 4],
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("planet_material_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&textures[0].1),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(&textures[1].1),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::TextureView(&textures[2].1),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: wgpu::BindingResource::TextureView(&textures[3].1),
            },
            wgpu::BindGroupEntry {
                binding: 5,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn texture_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

pub(crate) fn create_planet_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    color_format: wgpu::TextureFormat,
    models: &[SceneModel],
    lighting: &Lighting,
) -> PlanetResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("planet_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PLANET_WGSL.into()),
    });
    let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("planet_frame_bgl"),
        entries: &[
            helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ),
            helpers::uniform_layout_entry(1, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let material_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("planet_material_bgl"),
        entries: &[
            helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX),
            texture_layout_entry(1),
            texture_layout_entry(2),
            texture_layout_entry(3),
            texture_layout_entry(4),
            wgpu::BindGroupLayoutEntry {
                binding: 5,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("planet_pl"),
        bind_group_layouts: &[&frame_bgl, &material_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("planet_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_planet"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_stencil_state()),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_planet"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("planet_camera"),
        size: std::mem::size_of::<CameraUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("planet_light"),
        contents: bytemuck::bytes_of(&LightUniforms::from_lighting(lighting)),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("planet_frame_bg"),
        layout: &frame_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: light_buffer.as_entire_binding(),
            },
        ],
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("planet_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    let planets = models
        .iter()
        .map(|m| {
            let mesh = uv_sphere(m.desc.radius, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("planet_vertices"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("planet_indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("planet_model"),
                contents: bytemuck::bytes_of(&ModelUniforms::from_matrix(m.model_matrix())),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
            let textures = MaterialChannel::ALL.map(|channel| {
                helpers::upload_rgba_texture(
                    device,
                    queue,
                    "planet_neutral",
                    &TextureData::solid(channel.neutral_texel()),
                    channel_format(channel),
                )
            });
            let bind_group =
                material_bind_group(device, &material_bgl, &model_buffer, &textures, &sampler);
            PlanetGpu {
                vertex_buffer,
                index_buffer,
                index_count: mesh.indices.len() as u32,
                model_buffer,
                textures,
                bind_group,
            }
        })
        .collect();

    PlanetResources {
        pipeline,
        camera_buffer,
        frame_bind_group,
        material_bgl,
        sampler,
        planets,
    }
}
