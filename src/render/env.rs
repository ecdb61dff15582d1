use hearts_core::EnvironmentMap;
use wgpu;
use wgpu::util::DeviceExt;

/// Equirectangular environment texture sampled for reflections and refraction.
pub(crate) struct EnvResources {
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
}

pub(crate) fn create_env_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    env: &EnvironmentMap,
) -> EnvResources {
    // sRGB, single level: decoded image bytes are uploaded untouched
    let texture = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some("env_tex"),
            size: wgpu::Extent3d {
                width: env.width(),
                height: env.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        env.pixels(),
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("env_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Nearest,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    log::info!(
        "[env] uploaded {}x{} ({:?})",
        env.width(),
        env.height(),
        env.source()
    );
    EnvResources { view, sampler }
}
