//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, Point, Rect, Vec2};
use peniko::{Color, Fill, Gradient};
use shadowlight_core::{BoxShadow, HIGHLIGHT_OPACITY, highlight, shadow_stack};
use vello::Scene;

/// Depth (logical px) of the highlight band; also the gradient stop count.
const HIGHLIGHT_DEPTH: usize = 6;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Render one outer shadow layer behind `rect`.
    fn render_shadow(&mut self, shadow: &BoxShadow, rect: Rect, opacity: f32, transform: Affine) {
        let shadow_rect = rect.inflate(shadow.spread, shadow.spread)
            + Vec2::new(shadow.offset_x, shadow.offset_y);
        // Spread can collapse the rect entirely.
        if shadow_rect.width() <= 0.0 || shadow_rect.height() <= 0.0 {
            return;
        }

        let color = shadow.color.to_color().multiply_alpha(opacity);
        self.scene.draw_blurred_rounded_rect(
            transform,
            shadow_rect,
            color,
            0.0,
            shadow.std_dev(),
        );
    }

    /// Render an inset shadow as a gradient band along the top edge of `rect`.
    ///
    /// Only the top edge shows through for the highlight's geometry, so the
    /// band's alpha ramp is the blurred edge of the offset hole rect.
    fn render_inset(&mut self, shadow: &BoxShadow, rect: Rect, opacity: f32, transform: Affine) {
        // Distance from the square's top edge down to the hole's top edge.
        let hole_top = shadow.offset_y + shadow.spread;
        let depth = (HIGHLIGHT_DEPTH as f64).min(rect.height());
        if depth <= 0.0 {
            return;
        }

        let base = shadow.color.to_color().multiply_alpha(opacity);
        let stops: [Color; HIGHLIGHT_DEPTH] = std::array::from_fn(|i| {
            let y = depth * i as f64 / (HIGHLIGHT_DEPTH - 1) as f64;
            let coverage = 1.0 - gaussian_cdf((y - hole_top) / shadow.std_dev().max(f64::EPSILON));
            base.multiply_alpha(coverage as f32)
        });

        let band = Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + depth);
        let gradient = Gradient::new_linear(
            Point::new(band.x0, band.y0),
            Point::new(band.x0, band.y1),
        )
        .with_stops(stops);
        self.scene.fill(Fill::NonZero, transform, &gradient, None, &band);
    }
}

/// Standard normal CDF (Abramowitz & Stegun 7.1.26 erf).
fn gaussian_cdf(x: f64) -> f64 {
    let z = x / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + 0.3275911 * z.abs());
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    let erf = 1.0 - poly * (-z * z).exp();
    let erf = if z < 0.0 { -erf } else { erf };
    0.5 * (1.0 + erf)
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        // Clear the scene
        self.scene.reset();

        let transform = ctx.transform();
        let fill_color = ctx.style.background_color.to_color(1.0);
        let shadows = shadow_stack(ctx.params, ctx.style);
        let shadow_opacity = ctx.style.shadow_opacity as f32;
        let highlight = highlight();

        // Page background
        let logical = ctx.logical_size();
        self.scene.fill(
            Fill::NonZero,
            transform,
            fill_color,
            None,
            &Rect::new(0.0, 0.0, logical.width, logical.height),
        );

        for rect in ctx.shape_rects() {
            for shadow in &shadows {
                self.render_shadow(shadow, rect, shadow_opacity, transform);
            }
            self.scene.fill(Fill::NonZero, transform, fill_color, None, &rect);
            self.render_inset(&highlight, rect, HIGHLIGHT_OPACITY as f32, transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use shadowlight_core::{Parameter, UiParameters, derive_style};

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_default_scene() {
        let mut renderer = VelloRenderer::new();
        let params = UiParameters::default();
        let style = derive_style(&params);
        let ctx = RenderContext::new(&params, &style, Size::new(800.0, 600.0));

        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_take_scene_resets() {
        let mut renderer = VelloRenderer::new();
        let params = UiParameters::default().with(Parameter::ShapeCount, 4.0);
        let style = derive_style(&params);
        let ctx = RenderContext::new(&params, &style, Size::new(1600.0, 900.0))
            .with_scale_factor(2.0);

        renderer.build_scene(&ctx);
        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_background_color_matches_style() {
        let renderer = VelloRenderer::new();
        let params = UiParameters::default().with(Parameter::BackgroundLightness, 100.0);
        let style = derive_style(&params);
        let ctx = RenderContext::new(&params, &style, Size::new(800.0, 600.0));
        let color = renderer.background_color(&ctx);
        for c in color.components {
            assert!((c - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_gaussian_cdf() {
        assert!((gaussian_cdf(0.0) - 0.5).abs() < 1e-6);
        assert!((gaussian_cdf(1.0) - 0.8413).abs() < 1e-3);
        assert!((gaussian_cdf(-1.0) - 0.1587).abs() < 1e-3);
    }
}
