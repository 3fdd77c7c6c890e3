//! Reusable egui widget components for the SHADOW×LIGHT control panel.
//!
//! - **Range**: labelled range controls bound to one numeric value
//! - **Layout**: tiny uppercase labels, the logo, the credit line, the panel frame
//!
//! All widgets take the current text color, since the page flips between
//! black and white text depending on the background.

pub mod layout;
pub mod range;

pub use layout::{controls_frame, credit, faded, logo, section_label};
pub use range::RangeControl;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Tiny uppercase label size
    pub const LABEL: f32 = 9.0;
    /// Logo text size
    pub const LOGO: f32 = 12.0;
    /// Range control track width
    pub const RANGE_WIDTH: f32 = 130.0;
    /// Gap under each control
    pub const CONTROL_GAP: f32 = 10.0;
    /// Gap under the logo
    pub const LOGO_GAP: f32 = 20.0;
    /// Distance of the panel from the window corner
    pub const PANEL_OFFSET: f32 = 20.0;
}

/// Opacities applied on top of the current text color.
pub mod theme {
    /// Control labels and credit line
    pub const LABEL_OPACITY: f32 = 0.3;
    /// The thin "X" between SHADOW and LIGHT
    pub const LOGO_ACCENT_OPACITY: f32 = 0.2;
    /// Range control track
    pub const TRACK_OPACITY: f32 = 0.25;
    /// Range control filled part and handle
    pub const HANDLE_OPACITY: f32 = 0.8;
}
