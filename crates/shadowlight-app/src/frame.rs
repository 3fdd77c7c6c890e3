//! Frame composition: the stage goes through vello into an intermediate
//! texture, is copied onto the surface, and the egui panel is drawn over it.

use kurbo::Size;
use shadowlight_render::{RenderContext, RenderResult, Renderer, RendererError, VelloRenderer};
use vello::peniko::Color;
use vello::util::RenderSurface;
use vello::{AaConfig, RenderParams, RendererOptions, Scene, wgpu};

use crate::app::ViewState;

/// Tessellated egui output for one frame.
pub struct Overlay {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// GPU renderers for the stage and the control overlay.
pub struct Compositor {
    vello: vello::Renderer,
    stage: VelloRenderer,
    /// Vello writes Rgba8Unorm; WebGPU surfaces are usually Bgra8Unorm.
    blitter: wgpu::util::TextureBlitter,
    overlay: egui_wgpu::Renderer,
}

impl Compositor {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> RenderResult<Self> {
        let vello = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;

        Ok(Self {
            vello,
            stage: VelloRenderer::new(),
            blitter: wgpu::util::TextureBlitter::new(device, format),
            overlay: egui_wgpu::Renderer::new(
                device,
                format,
                egui_wgpu::RendererOptions::default(),
            ),
        })
    }

    /// Draw `view` and the overlay onto the surface and present it.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface: &RenderSurface<'_>,
        view: &ViewState,
        scale_factor: f64,
        overlay: Overlay,
    ) -> RenderResult<()> {
        let ctx = RenderContext::new(
            &view.params,
            &view.style,
            Size::new(surface.config.width as f64, surface.config.height as f64),
        )
        .with_scale_factor(scale_factor);
        let (width, height) = ctx.physical_extent()?;

        let base_color = self.stage.background_color(&ctx);
        self.stage.build_scene(&ctx);
        let scene = self.stage.take_scene();

        let frame = surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;
        let stage_view = self.render_stage(device, queue, &scene, base_color, width, height)?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame encoder"),
        });
        self.blitter.copy(device, &mut encoder, &stage_view, &target);
        self.draw_overlay(device, queue, &mut encoder, &target, &overlay, [width, height]);
        queue.submit(std::iter::once(encoder.finish()));

        for id in &overlay.textures.free {
            self.overlay.free_texture(id);
        }
        frame.present();
        Ok(())
    }

    /// Render the stage scene into a fresh storage texture.
    fn render_stage(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &Scene,
        base_color: Color,
        width: u32,
        height: u32,
    ) -> RenderResult<wgpu::TextureView> {
        // Storage binding is only allowed for Rgba8Unorm on WebGPU.
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("stage texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::STORAGE_BINDING
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let target = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };
        self.vello
            .render_to_texture(device, queue, scene, &target, &params)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;
        Ok(target)
    }

    /// Record the egui pass over whatever the surface already holds.
    fn draw_overlay(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        overlay: &Overlay,
        size_in_pixels: [u32; 2],
    ) {
        for (id, delta) in &overlay.textures.set {
            self.overlay.update_texture(device, queue, *id, delta);
        }

        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: overlay.pixels_per_point,
        };
        self.overlay
            .update_buffers(device, queue, encoder, &overlay.primitives, &screen);

        let mut pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("overlay pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();
        self.overlay.render(&mut pass, &overlay.primitives, &screen);
    }
}
