//! Layered box shadows drawn around every shape.
//!
//! Semantics follow CSS `box-shadow`: a positive spread grows the shadow
//! rect, a negative one shrinks it, and blur is the CSS blur radius.

use peniko::Color;

use crate::color::Hsl;
use crate::params::UiParameters;
use crate::style::DerivedStyle;

/// Opacity of the inset highlight overlay.
pub const HIGHLIGHT_OPACITY: f64 = 0.2;

/// Offset, blur and spread of each outer layer, tight to wide.
const LAYERS: [(f64, f64, f64); 4] = [
    (2.0, 4.0, 0.0),
    (5.0, 10.0, -5.0),
    (10.0, 30.0, -20.0),
    (30.0, 60.0, -10.0),
];

/// Color of a shadow layer, kept alongside its CSS form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadowColor {
    Hsla(Hsl, f64),
    White,
}

impl ShadowColor {
    pub fn to_color(self) -> Color {
        match self {
            ShadowColor::Hsla(hsl, alpha) => hsl.to_color(alpha),
            ShadowColor::White => Color::WHITE,
        }
    }

    pub fn css(self) -> String {
        match self {
            ShadowColor::Hsla(hsl, alpha) => hsl.css_with_alpha(alpha),
            ShadowColor::White => "white".to_string(),
        }
    }
}

/// One `box-shadow` layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub inset: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: ShadowColor,
}

impl BoxShadow {
    pub fn new(offset_x: f64, offset_y: f64, blur: f64, spread: f64, color: ShadowColor) -> Self {
        Self {
            inset: false,
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    /// Gaussian standard deviation matching the CSS blur radius.
    pub fn std_dev(&self) -> f64 {
        self.blur / 2.0
    }

    /// CSS text of this layer, e.g. `0 5px 10px -5px hsla(0, 0%, 100%, 0.3)`.
    pub fn css(&self) -> String {
        let mut parts = Vec::with_capacity(6);
        if self.inset {
            parts.push("inset".to_string());
        }
        parts.push(css_length(self.offset_x));
        parts.push(css_length(self.offset_y));
        parts.push(css_length(self.blur));
        if self.spread != 0.0 {
            parts.push(css_length(self.spread));
        }
        parts.push(self.color.css());
        parts.join(" ")
    }
}

fn css_length(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", value)
    }
}

/// The four outer layers around each shape, drawn at `style.shadow_opacity`.
pub fn shadow_stack(params: &UiParameters, style: &DerivedStyle) -> [BoxShadow; 4] {
    let color = ShadowColor::Hsla(style.shadow_color(), params.shadow_strength);
    LAYERS.map(|(offset_y, blur, spread)| BoxShadow::new(0.0, offset_y, blur, spread, color))
}

/// The inset highlight along the top edge, drawn at [`HIGHLIGHT_OPACITY`].
pub fn highlight() -> BoxShadow {
    BoxShadow::new(0.0, 2.0, 4.0, -3.0, ShadowColor::White).inset()
}

/// Join layers into a single `box-shadow` value.
pub fn stack_css(layers: &[BoxShadow]) -> String {
    layers
        .iter()
        .map(BoxShadow::css)
        .collect::<Vec<_>>()
        .join(", ")
}
