//! HSL colors and perceived-brightness classification.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Brightness below which a color counts as dark (YIQ scale, 0-255).
pub const DARK_THRESHOLD: f64 = 128.0;

/// An HSL color. Saturation and lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to sRGB channels on a 0-255 scale, rounded half-up to whole
    /// values the way CSS color parsers report them.
    pub fn to_rgb(&self) -> [f64; 3] {
        let h = self.hue.rem_euclid(360.0) / 360.0;
        let s = self.saturation.clamp(0.0, 100.0) / 100.0;
        let l = self.lightness.clamp(0.0, 100.0) / 100.0;

        let [r, g, b] = if s == 0.0 {
            [l; 3]
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            [
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            ]
        };
        [r, g, b].map(|c| round_half_up((c * 255.0).clamp(0.0, 255.0)))
    }

    /// Convert to a peniko color with the given alpha.
    pub fn to_color(&self, alpha: f64) -> Color {
        let [r, g, b] = self.to_rgb();
        Color::new([
            (r / 255.0) as f32,
            (g / 255.0) as f32,
            (b / 255.0) as f32,
            alpha.clamp(0.0, 1.0) as f32,
        ])
    }

    /// YIQ brightness, `(299 R + 587 G + 114 B) / 1000`.
    pub fn perceived_brightness(&self) -> f64 {
        let [r, g, b] = self.to_rgb();
        (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0
    }

    /// Whether the color reads as dark to the eye.
    pub fn is_dark(&self) -> bool {
        self.perceived_brightness() < DARK_THRESHOLD
    }

    /// `hsl(H, S%, L%)`
    pub fn css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }

    /// `hsla(H, S%, L%, A)`
    pub fn css_with_alpha(&self, alpha: f64) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, alpha
        )
    }
}

/// One RGB channel from the HSL hue sextant at `t` (a fraction of a turn).
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Round to the nearest integer, with halves going up (`127.5` -> `128`).
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Classify an HSL triple as perceptually dark.
///
/// Hue and saturation matter: pure blue at 50% lightness is dark, pure yellow
/// at the same lightness is not.
pub fn classify_brightness(hue: f64, saturation: f64, lightness: f64) -> bool {
    Hsl::new(hue, saturation, lightness).is_dark()
}

/// Text color picked for contrast against the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    /// Contrasting text color for a background of the given darkness.
    pub fn contrasting(is_dark: bool) -> Self {
        if is_dark { TextColor::White } else { TextColor::Black }
    }

    /// CSS keyword.
    pub fn css(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }

    pub fn to_color(self) -> Color {
        match self {
            TextColor::Black => Color::BLACK,
            TextColor::White => Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(hsl: Hsl, expected: [f64; 3]) {
        let rgb = hsl.to_rgb();
        for (got, want) in rgb.iter().zip(expected) {
            assert!((got - want).abs() < 0.01, "{:?} -> {:?}, want {:?}", hsl, rgb, expected);
        }
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_rgb(Hsl::new(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
        assert_rgb(Hsl::new(0.0, 0.0, 100.0), [255.0, 255.0, 255.0]);
        assert_rgb(Hsl::new(0.0, 100.0, 50.0), [255.0, 0.0, 0.0]);
        assert_rgb(Hsl::new(120.0, 100.0, 50.0), [0.0, 255.0, 0.0]);
        assert_rgb(Hsl::new(240.0, 100.0, 50.0), [0.0, 0.0, 255.0]);
    }

    #[test]
    fn test_hue_wraps() {
        assert_rgb(Hsl::new(360.0, 100.0, 50.0), [255.0, 0.0, 0.0]);
    }

    #[test]
    fn test_black_is_dark() {
        assert!(classify_brightness(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_white_is_light() {
        assert!(!classify_brightness(0.0, 0.0, 100.0));
    }

    #[test]
    fn test_blue_is_dark_at_mid_lightness() {
        let blue = Hsl::new(240.0, 100.0, 50.0);
        assert!((blue.perceived_brightness() - 29.07).abs() < 0.01);
        assert!(blue.is_dark());
    }

    #[test]
    fn test_yellow_is_light_at_mid_lightness() {
        let yellow = Hsl::new(60.0, 100.0, 50.0);
        assert!((yellow.perceived_brightness() - 225.93).abs() < 0.01);
        assert!(!yellow.is_dark());
    }

    #[test]
    fn test_grey_threshold() {
        // 50% grey is 127.5 per channel, which rounds up to 128.
        assert_eq!(Hsl::new(0.0, 0.0, 50.0).to_rgb(), [128.0, 128.0, 128.0]);
        assert!(!classify_brightness(0.0, 0.0, 50.0));
        assert!(classify_brightness(0.0, 0.0, 40.0));
    }

    #[test]
    fn test_channels_round_before_weighting() {
        // Both sit just under 128 on raw channels and just over once rounded.
        let coral = Hsl::new(0.0, 61.0, 60.0);
        assert_eq!(coral.to_rgb(), [215.0, 91.0, 91.0]);
        assert!((coral.perceived_brightness() - 128.076).abs() < 1e-9);
        assert!(!coral.is_dark());

        let salmon = Hsl::new(4.0, 76.0, 60.0);
        assert_eq!(salmon.to_rgb(), [231.0, 86.0, 75.0]);
        assert!(!salmon.is_dark());
    }

    #[test]
    fn test_channels_are_whole_numbers() {
        for hue in (0..=360).step_by(7) {
            for sat in (0..=100).step_by(3) {
                for light in (0..=100).step_by(10) {
                    let rgb = Hsl::new(hue as f64, sat as f64, light as f64).to_rgb();
                    assert!(rgb.iter().all(|c| c.fract() == 0.0 && (0.0..=255.0).contains(c)));
                }
            }
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        for hue in (0..=360).step_by(15) {
            for sat in (0..=100).step_by(25) {
                for light in (0..=100).step_by(10) {
                    let (h, s, l) = (hue as f64, sat as f64, light as f64);
                    assert_eq!(classify_brightness(h, s, l), classify_brightness(h, s, l));
                }
            }
        }
    }

    #[test]
    fn test_css_formatting() {
        let color = Hsl::new(240.0, 100.0, 50.0);
        assert_eq!(color.css(), "hsl(240, 100%, 50%)");
        assert_eq!(color.css_with_alpha(0.3), "hsla(240, 100%, 50%, 0.3)");
    }

    #[test]
    fn test_text_color() {
        assert_eq!(TextColor::contrasting(true), TextColor::White);
        assert_eq!(TextColor::contrasting(false), TextColor::Black);
        assert_eq!(TextColor::White.css(), "white");
        assert_eq!(TextColor::Black.to_color(), Color::BLACK);
    }
}
