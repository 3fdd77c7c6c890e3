//! SHADOW×LIGHT Core Library
//!
//! Platform-agnostic parameter model and style derivation: a handful of slider
//! values in, background, text and shadow styling out.

pub mod color;
pub mod layout;
pub mod params;
pub mod shadow;
pub mod style;
pub mod vars;

pub use color::{classify_brightness, Hsl, TextColor, DARK_THRESHOLD};
pub use layout::{layout_shapes, shape_size};
pub use params::{ParamError, ParamRange, ParamResult, Parameter, UiParameters};
pub use shadow::{highlight, shadow_stack, stack_css, BoxShadow, ShadowColor, HIGHLIGHT_OPACITY};
pub use style::{derive_style, DerivedStyle, BASE_SIZE};
pub use vars::{StyleVars, VAR_NAMES};
