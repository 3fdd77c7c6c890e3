//! Layout helpers: labels, logo, credit line, panel frame.

use egui::{Color32, Frame, Margin, RichText, Ui, Vec2};

use crate::{sizing, theme};

/// `color` at a fraction of its own alpha.
pub fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity)
}

/// Draw a section label (tiny, bold, uppercase, faded).
pub fn section_label(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(text.to_uppercase())
            .size(sizing::LABEL)
            .strong()
            .color(faded(color, theme::LABEL_OPACITY)),
    );
}

/// Draw the SHADOW×LIGHT wordmark.
pub fn logo(ui: &mut Ui, color: Color32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = Vec2::ZERO;
        ui.label(RichText::new("SHADOW").size(sizing::LOGO).strong().color(color));
        ui.add_space(3.0);
        ui.label(
            RichText::new("X")
                .size(sizing::LOGO)
                .color(faded(color, theme::LOGO_ACCENT_OPACITY)),
        );
        ui.add_space(3.0);
        ui.label(RichText::new("LIGHT").size(sizing::LOGO).strong().color(color));
    });
    ui.add_space(sizing::LOGO_GAP);
}

/// Draw the credit line with its link.
pub fn credit(ui: &mut Ui, color: Color32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = Vec2::new(3.0, 0.0);
        let faded_color = faded(color, theme::LABEL_OPACITY);
        ui.label(
            RichText::new("MADE BY")
                .size(sizing::LABEL)
                .strong()
                .color(faded_color),
        );
        ui.hyperlink_to(
            RichText::new("Q").size(sizing::LABEL).strong().color(faded_color),
            "https://jonquach.com",
        );
    });
}

/// Frame for the floating controls panel: no fill, no border, the page shows through.
pub fn controls_frame() -> Frame {
    Frame::new().inner_margin(Margin::same(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_scales_alpha() {
        let c = faded(Color32::WHITE, 0.5);
        assert!(c.a() < 255);
        assert!(c.a() > 100);
        assert_eq!(faded(Color32::BLACK, 1.0), Color32::BLACK);
    }
}
