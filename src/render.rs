use hearts_core::Scene;
use web_sys as web;
use wgpu;

mod env;
mod hearts;
mod helpers;
mod targets;

use hearts::{Globals, HeartsResources};
use targets::RenderTargets;

/// Surface and device acquired from the canvas, before any scene exists.
pub struct SurfaceSetup<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl<'a> SurfaceSetup<'a> {
    pub async fn request(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
        // Transparent canvas over the page background
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
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
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    hearts: HeartsResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// Upload the scene's mesh, instances and environment and build the pipeline.
    pub fn new(setup: SurfaceSetup<'a>, scene: &Scene) -> Self {
        let SurfaceSetup {
            surface,
            device,
            queue,
            config,
        } = setup;
        let (width, height) = (config.width, config.height);
        let targets = RenderTargets::new(&device, config.format, width, height);
        let env = env::create_env_resources(&device, &queue, &scene.environment);
        let hearts = hearts::create_hearts_resources(&device, config.format, &env, scene);
        log::info!(
            "[gpu] ready: {} instances x {} vertices",
            hearts.instance_count,
            hearts.vertex_count
        );

        Self {
            surface,
            device,
            queue,
            config,
            targets,
            hearts,
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reapply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets
            .recreate(&self.device, self.config.format, self.width, self.height);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals::from_scene(scene);
        self.queue.write_buffer(
            &self.hearts.uniform_buffer,
            0,
            bytemuck::bytes_of(&globals),
        );

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
                label: Some("hearts_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.hearts.pipeline);
            rpass.set_bind_group(0, &self.hearts.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.hearts.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.hearts.instance_buffer.slice(..));
            rpass.draw(0..self.hearts.vertex_count, 0..self.hearts.instance_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
