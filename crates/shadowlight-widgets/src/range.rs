//! Labelled range control.

use egui::{Color32, Slider, Ui};

use crate::layout::{faded, section_label};
use crate::{sizing, theme};

/// A label above a slider with fixed min/max/step.
///
/// ```ignore
/// if let Some(v) = RangeControl::new("Hue", hue, 0.0, 360.0).step(1.0).show(ui, text) {
///     // apply v
/// }
/// ```
pub struct RangeControl<'a> {
    label: &'a str,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl<'a> RangeControl<'a> {
    pub fn new(label: &'a str, value: f64, min: f64, max: f64) -> Self {
        Self {
            label,
            value,
            min,
            max,
            step: 1.0,
        }
    }

    /// Set the step increment.
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Show the control. Returns the new value when the user changed it.
    pub fn show(self, ui: &mut Ui, text_color: Color32) -> Option<f64> {
        let mut value = self.value;
        let mut changed = false;

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.spacing_mut().slider_width = sizing::RANGE_WIDTH;
            section_label(ui, self.label, text_color);

            let visuals = ui.visuals_mut();
            visuals.selection.bg_fill = faded(text_color, theme::HANDLE_OPACITY);
            visuals.widgets.inactive.bg_fill = faded(text_color, theme::TRACK_OPACITY);
            visuals.widgets.inactive.fg_stroke.color = faded(text_color, theme::HANDLE_OPACITY);
            visuals.widgets.hovered.fg_stroke.color = text_color;
            visuals.widgets.active.fg_stroke.color = text_color;

            let slider = Slider::new(&mut value, self.min..=self.max)
                .step_by(self.step)
                .show_value(false);
            changed = ui.add(slider).changed();
        });
        ui.add_space(sizing::CONTROL_GAP);

        changed.then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_control_reports_nothing() {
        let ctx = egui::Context::default();
        let mut results = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                results.push(
                    RangeControl::new("Size", 1.0, 0.25, 3.0)
                        .step(0.25)
                        .show(ui, Color32::WHITE),
                );
            });
        });
        assert!(!results.is_empty());
        assert!(results.iter().all(Option::is_none));
    }

    #[test]
    fn test_default_step() {
        let control = RangeControl::new("Hue", 0.0, 0.0, 360.0);
        assert_eq!(control.step, 1.0);
        assert_eq!(control.step(10.0).step, 10.0);
    }
}
