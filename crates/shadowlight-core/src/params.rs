//! The UI parameter snapshot and the controls bound to it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameter input errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("Not a number for {param}: {input:?}")]
    NotANumber { param: &'static str, input: String },
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),
}

/// Result type for parameter parsing.
pub type ParamResult<T> = Result<T, ParamError>;

/// Domain and step of a single range control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp `value` into the domain and snap it onto the step grid (anchored at `min`).
    pub fn constrain(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).min(self.max);
        round_to_decimals(snapped, self.decimals())
    }

    /// Whether `value` already lies inside the domain.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of decimal places the step needs (0.25 -> 2, 0.1 -> 1, 10 -> 0).
    pub fn decimals(&self) -> i32 {
        let mut decimals = 0;
        let mut step = self.step;
        while decimals < 6 && (step - step.round()).abs() > 1e-9 {
            step *= 10.0;
            decimals += 1;
        }
        decimals
    }
}

// Strips float noise like 0.30000000000000004 left over from step arithmetic.
fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// One field of [`UiParameters`], i.e. one range control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    ShapeCount,
    SizeRatio,
    BackgroundLightness,
    ShadowStrength,
    Saturation,
    Hue,
}

impl Parameter {
    /// All parameters in control-panel order.
    pub const ALL: [Parameter; 6] = [
        Parameter::ShapeCount,
        Parameter::SizeRatio,
        Parameter::BackgroundLightness,
        Parameter::ShadowStrength,
        Parameter::Saturation,
        Parameter::Hue,
    ];

    /// Control label.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::ShapeCount => "Shapes",
            Parameter::SizeRatio => "Size",
            Parameter::BackgroundLightness => "Lightness",
            Parameter::ShadowStrength => "Strength",
            Parameter::Saturation => "Saturation",
            Parameter::Hue => "Hue",
        }
    }

    /// Key used in URL query strings.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::ShapeCount => "shapes",
            Parameter::SizeRatio => "size",
            Parameter::BackgroundLightness => "lightness",
            Parameter::ShadowStrength => "strength",
            Parameter::Saturation => "saturation",
            Parameter::Hue => "hue",
        }
    }

    /// Look up a parameter by its query key (case-insensitive).
    pub fn from_key(key: &str) -> ParamResult<Self> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParamError::UnknownParameter(key.to_string()))
    }

    /// Domain and step of the control.
    pub fn range(self) -> ParamRange {
        match self {
            Parameter::ShapeCount => ParamRange::new(1.0, 4.0, 1.0),
            Parameter::SizeRatio => ParamRange::new(0.25, 3.0, 0.25),
            Parameter::BackgroundLightness => ParamRange::new(0.0, 100.0, 10.0),
            Parameter::ShadowStrength => ParamRange::new(0.1, 0.5, 0.1),
            Parameter::Saturation => ParamRange::new(0.0, 100.0, 1.0),
            Parameter::Hue => ParamRange::new(0.0, 360.0, 1.0),
        }
    }
}

/// Immutable snapshot of every control value.
///
/// Owned by the top-level view and replaced wholesale on each change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UiParameters {
    /// Hue in degrees, [0, 360].
    pub hue: f64,
    /// Saturation in percent, [0, 100].
    pub saturation: f64,
    /// Background lightness in percent, [0, 100].
    pub background_lightness: f64,
    /// Alpha of each shadow layer, [0.1, 0.5].
    pub shadow_strength: f64,
    /// Height multiplier relative to the base size, [0.25, 3].
    pub size_ratio: f64,
    /// Number of shapes on stage, [1, 4].
    pub shape_count: u32,
}

impl Default for UiParameters {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            background_lightness: 0.0,
            shadow_strength: 0.3,
            size_ratio: 1.0,
            shape_count: 1,
        }
    }
}

impl UiParameters {
    /// Read one parameter as a float.
    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::ShapeCount => self.shape_count as f64,
            Parameter::SizeRatio => self.size_ratio,
            Parameter::BackgroundLightness => self.background_lightness,
            Parameter::ShadowStrength => self.shadow_strength,
            Parameter::Saturation => self.saturation,
            Parameter::Hue => self.hue,
        }
    }

    /// Return a new snapshot with `param` set to `value`, clamped and snapped
    /// to the control's step.
    #[must_use]
    pub fn with(self, param: Parameter, value: f64) -> Self {
        let value = param.range().constrain(value);
        let mut next = self;
        match param {
            Parameter::ShapeCount => next.shape_count = value as u32,
            Parameter::SizeRatio => next.size_ratio = value,
            Parameter::BackgroundLightness => next.background_lightness = value,
            Parameter::ShadowStrength => next.shadow_strength = value,
            Parameter::Saturation => next.saturation = value,
            Parameter::Hue => next.hue = value,
        }
        next
    }

    /// Whether every field lies inside its control's domain.
    pub fn is_valid(&self) -> bool {
        Parameter::ALL
            .into_iter()
            .all(|p| p.range().contains(self.get(p)))
    }

    /// Parse raw control text into a number.
    pub fn parse_value(param: Parameter, input: &str) -> ParamResult<f64> {
        let trimmed = input.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParamError::NotANumber {
                param: param.key(),
                input: trimmed.to_string(),
            })
    }

    /// Build a snapshot from a `key=value&...` query string or URL hash,
    /// starting from the defaults. Unknown keys and bad values are skipped.
    pub fn from_query(query: &str) -> Self {
        Self::default().apply_query(query)
    }

    /// Apply every recognised `key=value` pair of `query` on top of `self`.
    #[must_use]
    pub fn apply_query(self, query: &str) -> Self {
        let query = query.trim_start_matches(['?', '#']);

        let mut params = self;
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let mut parts = pair.splitn(2, '=');
            let (Some(key), Some(raw)) = (parts.next(), parts.next()) else {
                continue;
            };
            let param = match Parameter::from_key(key) {
                Ok(param) => param,
                Err(_) => continue,
            };
            match Self::parse_value(param, raw) {
                Ok(value) => params = params.with(param, value),
                Err(e) => log::warn!("Ignoring query value: {}", e),
            }
        }
        params
    }
}
