//! Renderer trait abstraction.

use kurbo::{Affine, Rect, Size};
use peniko::Color;
use shadowlight_core::{DerivedStyle, UiParameters, layout_shapes};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Current parameter snapshot.
    pub params: &'a UiParameters,
    /// Style derived from `params`.
    pub style: &'a DerivedStyle,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(params: &'a UiParameters, style: &'a DerivedStyle, viewport_size: Size) -> Self {
        Self {
            params,
            style,
            viewport_size,
            scale_factor: 1.0,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Viewport size in logical units.
    pub fn logical_size(&self) -> Size {
        let scale = if self.scale_factor > 0.0 { self.scale_factor } else { 1.0 };
        Size::new(self.viewport_size.width / scale, self.viewport_size.height / scale)
    }

    /// Logical-to-physical transform.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// Viewport size in whole physical pixels, as the frame's render target
    /// needs it. Empty or non-finite viewports have nothing to draw into.
    pub fn physical_extent(&self) -> RenderResult<(u32, u32)> {
        let Size { width, height } = self.viewport_size;
        if !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0) {
            return Err(RendererError::Surface(format!(
                "viewport {}x{} has no drawable area",
                width, height
            )));
        }
        Ok((width as u32, height as u32))
    }

    /// Shape rects in logical units, one per `shape_count`.
    pub fn shape_rects(&self) -> Vec<Rect> {
        layout_shapes(self.style, self.params.shape_count, self.logical_size())
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering engines.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.style.background_color.to_color(1.0)
    }
}
