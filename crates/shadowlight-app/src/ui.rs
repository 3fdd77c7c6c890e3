//! UI components using egui.

use egui::{Align2, Color32, Context, Vec2};
use shadowlight_core::{DerivedStyle, Parameter, TextColor, UiParameters};
use shadowlight_widgets::{controls_frame, credit, logo, sizing, RangeControl};

/// Actions that can be triggered by the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    /// A range control moved.
    SetParameter(Parameter, f64),
}

/// egui color for the derived text color.
pub fn text_color32(color: TextColor) -> Color32 {
    match color {
        TextColor::Black => Color32::BLACK,
        TextColor::White => Color32::WHITE,
    }
}

/// Render all UI panels and return the triggered action, if any.
pub fn render_ui(ctx: &Context, params: &UiParameters, style: &DerivedStyle) -> Option<UiAction> {
    render_controls(ctx, params, text_color32(style.text_color))
}

/// Render the top-left controls panel: logo, one range per parameter, credit.
fn render_controls(ctx: &Context, params: &UiParameters, text: Color32) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("controls"))
        .anchor(Align2::LEFT_TOP, Vec2::splat(sizing::PANEL_OFFSET))
        .show(ctx, |ui| {
            controls_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    logo(ui, text);

                    for param in Parameter::ALL {
                        let range = param.range();
                        let control =
                            RangeControl::new(param.label(), params.get(param), range.min, range.max)
                                .step(range.step);
                        if let Some(value) = control.show(ui, text) {
                            action = Some(UiAction::SetParameter(param, value));
                        }
                    }

                    ui.add_space(sizing::CONTROL_GAP);
                    credit(ui, text);
                });
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadowlight_core::derive_style;

    #[test]
    fn test_text_color32() {
        assert_eq!(text_color32(TextColor::White), Color32::WHITE);
        assert_eq!(text_color32(TextColor::Black), Color32::BLACK);
    }

    #[test]
    fn test_idle_frame_emits_no_action() {
        let ctx = Context::default();
        let params = UiParameters::default();
        let style = derive_style(&params);

        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            actions.push(render_ui(ctx, &params, &style));
        });
        assert!(actions.iter().all(Option::is_none));
    }
}
