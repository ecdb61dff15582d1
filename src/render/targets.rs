use super::helpers;
use wgpu;

/// Multisampled color and depth attachments sized to the surface.
///
/// The color target resolves into the swapchain frame each pass; depth is
/// discarded after the pass.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_render_texture(
            device,
            "msaa_color",
            width,
            height,
            color_format,
            helpers::MSAA_SAMPLES,
        );
        let (depth_tex, depth_view) = helpers::create_render_texture(
            device,
            "depth",
            width,
            height,
            helpers::DEPTH_FORMAT,
            helpers::MSAA_SAMPLES,
        );
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        self.msaa_tex.destroy();
        self.depth_tex.destroy();
        *self = Self::new(device, color_format, width, height);
    }
}
