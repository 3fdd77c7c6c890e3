//! SHADOW×LIGHT Application
//!
//! The application shell providing windowing, the GPU surface, the egui
//! control panel and the parameter snapshot that drives the stage.

mod app;
mod frame;
mod ui;

pub use app::{App, AppConfig, ViewState};
pub use ui::{render_ui, text_color32, UiAction};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
