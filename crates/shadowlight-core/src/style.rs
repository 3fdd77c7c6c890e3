//! Style derivation: UI parameters in, fully resolved visual style out.

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, TextColor};
use crate::params::UiParameters;

/// Width of a shape, and the height it has at size ratio 1.
pub const BASE_SIZE: f64 = 200.0;

/// Everything a frame needs to know about how things look.
///
/// Recomputed from [`UiParameters`] on every change, never stored on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStyle {
    /// Page and shape fill.
    pub background_color: Hsl,
    /// Perceived-brightness classification of `background_color`.
    pub is_dark: bool,
    /// Contrasting text color.
    pub text_color: TextColor,
    /// Lightness channel of shadow colors: 100 on dark backgrounds, 0 on light.
    pub foreground_lightness: f64,
    /// Opacity of the whole shadow stack.
    pub shadow_opacity: f64,
    pub shape_width: f64,
    pub shape_height: f64,
}

impl DerivedStyle {
    /// Color of every outer shadow layer, before the stack opacity is applied.
    pub fn shadow_color(&self) -> Hsl {
        Hsl::new(
            self.background_color.hue,
            self.background_color.saturation,
            self.foreground_lightness,
        )
    }
}

/// Derive the style for one render.
pub fn derive_style(params: &UiParameters) -> DerivedStyle {
    let background_color = Hsl::new(
        params.hue,
        params.saturation,
        params.background_lightness,
    );
    let is_dark = background_color.is_dark();

    DerivedStyle {
        background_color,
        is_dark,
        text_color: TextColor::contrasting(is_dark),
        foreground_lightness: if is_dark { 100.0 } else { 0.0 },
        // Shadows are harder to see on dark backgrounds.
        shadow_opacity: if is_dark { 1.0 } else { 0.5 },
        shape_width: BASE_SIZE,
        shape_height: params.size_ratio * BASE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Parameter;

    fn params(hue: f64, saturation: f64, lightness: f64) -> UiParameters {
        UiParameters::default()
            .with(Parameter::Hue, hue)
            .with(Parameter::Saturation, saturation)
            .with(Parameter::BackgroundLightness, lightness)
    }

    #[test]
    fn test_black_background() {
        let style = derive_style(&params(0.0, 0.0, 0.0));
        assert!(style.is_dark);
        assert_eq!(style.text_color, TextColor::White);
        assert_eq!(style.shadow_opacity, 1.0);
        assert_eq!(style.foreground_lightness, 100.0);
    }

    #[test]
    fn test_white_background() {
        let style = derive_style(&params(0.0, 0.0, 100.0));
        assert!(!style.is_dark);
        assert_eq!(style.text_color, TextColor::Black);
        assert_eq!(style.shadow_opacity, 0.5);
        assert_eq!(style.foreground_lightness, 0.0);
    }

    #[test]
    fn test_blue_background_is_dark() {
        let style = derive_style(&params(240.0, 100.0, 50.0));
        assert!(style.is_dark);
        assert_eq!(style.text_color, TextColor::White);
    }

    #[test]
    fn test_mid_grey_background_is_light() {
        let style = derive_style(&params(0.0, 0.0, 50.0));
        assert!(!style.is_dark);
        assert_eq!(style.text_color, TextColor::Black);
        assert_eq!(style.shadow_opacity, 0.5);
        assert_eq!(style.shadow_color().lightness, 0.0);
    }

    #[test]
    fn test_shape_height_follows_ratio() {
        let style = derive_style(&UiParameters::default().with(Parameter::SizeRatio, 2.0));
        assert_eq!(style.shape_height, 400.0);
        assert_eq!(style.shape_width, BASE_SIZE);

        for step in 1..=12 {
            let ratio = step as f64 * 0.25;
            let style = derive_style(&UiParameters::default().with(Parameter::SizeRatio, ratio));
            assert_eq!(style.shape_height, ratio * 200.0);
        }
    }

    #[test]
    fn test_derive_is_pure() {
        let p = params(200.0, 40.0, 70.0);
        let a = derive_style(&p);
        let b = derive_style(&p);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_text_and_opacity_track_darkness() {
        for hue in (0..=360).step_by(30) {
            for lightness in (0..=100).step_by(10) {
                let style = derive_style(&params(hue as f64, 100.0, lightness as f64));
                if style.is_dark {
                    assert_eq!(style.text_color, TextColor::White);
                    assert_eq!(style.shadow_opacity, 1.0);
                } else {
                    assert_eq!(style.text_color, TextColor::Black);
                    assert_eq!(style.shadow_opacity, 0.5);
                }
            }
        }
    }

    #[test]
    fn test_shadow_color() {
        let style = derive_style(&params(30.0, 60.0, 90.0));
        let shadow = style.shadow_color();
        assert_eq!(shadow.hue, 30.0);
        assert_eq!(shadow.saturation, 60.0);
        assert_eq!(shadow.lightness, 0.0);
    }
}
