//! Named style variables that the derived style is projected onto.
//!
//! In the browser these land on the document element as CSS custom
//! properties; on native they are only logged.

use crate::params::UiParameters;
use crate::style::DerivedStyle;

/// Variable names in the order they are emitted.
pub const VAR_NAMES: [&str; 10] = [
    "--colorBgL",
    "--colorBg",
    "--colorH",
    "--colorS",
    "--colorL",
    "--colorStr",
    "--colorText",
    "--shapeWidth",
    "--shapeHeight",
    "--shadowOpacity",
];

/// Resolved values for every style variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVars {
    values: [String; 10],
}

impl StyleVars {
    pub fn from_style(params: &UiParameters, style: &DerivedStyle) -> Self {
        Self {
            values: [
                format!("{}", params.background_lightness),
                style.background_color.css(),
                format!("{}", params.hue),
                format!("{}%", params.saturation),
                format!("{}%", style.foreground_lightness),
                format!("{}", params.shadow_strength),
                style.text_color.css().to_string(),
                format!("{}px", style.shape_width),
                format!("{}px", style.shape_height),
                format!("{}", style.shadow_opacity),
            ],
        }
    }

    /// `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        VAR_NAMES
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Global stylesheet: the `:root` variable block plus page rules that use it.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css.push_str("html {\n  background: var(--colorBg);\n  color: var(--colorText);\n}\n");
        css.push_str("body {\n  background: var(--colorBg);\n}\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Parameter;
    use crate::style::derive_style;

    fn vars_for(params: UiParameters) -> StyleVars {
        StyleVars::from_style(&params, &derive_style(&params))
    }

    #[test]
    fn test_default_vars() {
        let vars = vars_for(UiParameters::default());
        let pairs: Vec<_> = vars.iter().collect();
        assert_eq!(
            pairs,
            [
                ("--colorBgL", "0"),
                ("--colorBg", "hsl(0, 0%, 0%)"),
                ("--colorH", "0"),
                ("--colorS", "0%"),
                ("--colorL", "100%"),
                ("--colorStr", "0.3"),
                ("--colorText", "white"),
                ("--shapeWidth", "200px"),
                ("--shapeHeight", "200px"),
                ("--shadowOpacity", "1"),
            ]
        );
    }

    #[test]
    fn test_light_background_vars() {
        let vars = vars_for(
            UiParameters::default()
                .with(Parameter::BackgroundLightness, 100.0)
                .with(Parameter::SizeRatio, 0.75),
        );
        assert_eq!(vars.get("--colorL"), Some("0%"));
        assert_eq!(vars.get("--colorText"), Some("black"));
        assert_eq!(vars.get("--shadowOpacity"), Some("0.5"));
        assert_eq!(vars.get("--shapeHeight"), Some("150px"));
        assert_eq!(vars.get("--missing"), None);
    }

    #[test]
    fn test_to_css() {
        let css = vars_for(UiParameters::default()).to_css();
        assert!(css.starts_with(":root {\n  --colorBgL: 0;\n"));
        assert!(css.contains("  --colorBg: hsl(0, 0%, 0%);\n"));
        assert!(css.contains("html {\n  background: var(--colorBg);\n  color: var(--colorText);\n}"));
        assert!(css.ends_with("body {\n  background: var(--colorBg);\n}\n"));
    }
}
