use super::env::EnvResources;
use super::helpers;
use hearts_core::extrude::Vertex;
use hearts_core::{InstanceRaw, Scene};
use wgpu;
use wgpu::util::DeviceExt;

const HEARTS_WGSL: &str = include_str!("../../shaders/hearts.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) field_model: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    /// rgb + density
    pub(crate) fog: [f32; 4],
    /// direction toward the light + intensity
    pub(crate) light_dir: [f32; 4],
    pub(crate) light_color: [f32; 4],
    /// rgb + intensity
    pub(crate) ambient: [f32; 4],
    /// rgb + opacity
    pub(crate) base_color: [f32; 4],
    /// transmission, ior, clearcoat, thickness
    pub(crate) material: [f32; 4],
    /// roughness, metalness, clearcoat roughness, f0
    pub(crate) surface: [f32; 4],
}

impl Globals {
    pub(crate) fn from_scene(scene: &Scene) -> Self {
        let m = &scene.material;
        let sun = &scene.sun;
        Self {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
            field_model: scene.field.model_matrix().to_cols_array_2d(),
            camera_pos: scene.camera.eye.extend(1.0).to_array(),
            fog: with_w(scene.fog.color.to_array(), scene.fog.density),
            light_dir: sun.direction().extend(sun.intensity).to_array(),
            light_color: with_w(sun.color.to_array(), 1.0),
            ambient: with_w(scene.ambient.color.to_array(), scene.ambient.intensity),
            base_color: with_w(m.color.to_array(), m.opacity),
            material: [m.transmission, m.ior, m.clearcoat, m.thickness],
            surface: [m.roughness, m.metalness, m.clearcoat_roughness, m.f0()],
        }
    }
}

fn with_w(rgb: [f32; 3], w: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], w]
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }
}

/// One shared mesh, one material, one draw call for the whole field.
pub(crate) struct HeartsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_count: u32,
}

pub(crate) fn create_hearts_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    env: &EnvResources,
    scene: &Scene,
) -> HeartsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("hearts_shader"),
        source: wgpu::ShaderSource::Wgsl(HEARTS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("hearts_bgl"),
        entries: &[
            helpers::uniform_entry(0),
            helpers::texture_entry(1),
            helpers::sampler_entry(2),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("hearts_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("hearts_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout(), instance_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: helpers::MSAA_SAMPLES,
            ..Default::default()
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("hearts_globals"),
        contents: bytemuck::bytes_of(&Globals::from_scene(scene)),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("hearts_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&env.view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&env.sampler),
            },
        ],
    });

    let mesh = scene.field.geometry();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("heart_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    // Instance matrices and colors are fixed after build; spin goes through Globals.
    let instances = scene.field.instance_data();
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("heart_instances"),
        contents: bytemuck::cast_slice(&instances),
        usage: wgpu::BufferUsages::VERTEX,
    });

    HeartsResources {
        pipeline,
        uniform_buffer,
        bind_group,
        vertex_buffer,
        vertex_count: mesh.vertices.len() as u32,
        instance_buffer,
        instance_count: instances.len() as u32,
    }
}
