use wgpu;
use wgpu::util::DeviceExt;

use super::helpers;
use crate::core::Starfield;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarInstance {
    pub(crate) pos_bright: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct StarUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) resolution: [f32; 2],
    pub(crate) focal_px: f32,
    pub(crate) star_radius: f32,
    pub(crate) min_radius_px: f32,
    pub(crate) _pad: [f32; 3],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];

pub(crate) struct StarResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) count: u32,
    staging: Vec<StarInstance>,
}

impl StarResources {
    /// Copy current star positions and brightness into the instance buffer.
    pub(crate) fn write_instances(&mut self, queue: &wgpu::Queue, starfield: &Starfield) {
        self.staging.clear();
        self.staging.extend(starfield.stars().iter().map(|s| {
            let p = s.position();
            StarInstance {
                pos_bright: [p.x, p.y, p.z, s.brightness()],
            }
        }));
        let n = self.staging.len().min(self.count as usize);
        if n > 0 {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&self.staging[..n]),
            );
        }
    }
}

pub(crate) fn create_star_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    starfield: &Starfield,
) -> StarResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("stars_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("stars_bgl"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("stars_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("stars_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_star"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<StarInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(helpers::depth_stencil_state()),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_star"),
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
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("stars_uniforms"),
        size: std::mem::size_of::<StarUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("stars_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    let initial = starfield
        .stars()
        .iter()
        .map(|s| {
            let p = s.position();
            StarInstance {
                pos_bright: [p.x, p.y, p.z, s.brightness()],
            }
        })
        .collect::<Vec<_>>();
    // Keep the buffer non-empty so an empty field still has a valid binding
    let contents: &[StarInstance] = if initial.is_empty() {
        &[StarInstance {
            pos_bright: [0.0; 4],
        }]
    } else {
        &initial
    };
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("stars_instances"),
        contents: bytemuck::cast_slice(contents),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });

    StarResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer,
        count: initial.len() as u32,
        staging: initial,
    }
}
