//! WebAssembly entry point and platform-specific code.

use shadowlight_core::{StyleVars, UiParameters};
use wasm_bindgen::prelude::*;

use crate::AppConfig;

/// Id of the canvas the stage renders into.
const CANVAS_ID: &str = "shadowlight-canvas";

/// Seed parameters from the URL.
/// Supports `?hue=240&saturation=100` and the same pairs in the hash.
pub fn params_from_url() -> UiParameters {
    let Some(window) = web_sys::window() else {
        return UiParameters::default();
    };
    let location = window.location();

    let mut params = UiParameters::default();
    if let Ok(search) = location.search() {
        params = params.apply_query(&search);
    }
    if let Ok(hash) = location.hash() {
        params = params.apply_query(&hash);
    }
    params
}

/// Write the style variables onto `document.documentElement.style`, along
/// with the page background and text color that read them.
pub fn apply_style_vars(vars: &StyleVars) {
    use wasm_bindgen::JsCast;

    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::warn!("No document element to style");
        return;
    };

    let style = root.style();
    let page_rules = [("background", "var(--colorBg)"), ("color", "var(--colorText)")];
    for (name, value) in vars.iter().chain(page_rules) {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("Could not set {}: {:?}", name, e);
        }
    }
}

/// Browser viewport size in physical pixels.
pub fn viewport_physical_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let dpr = window.device_pixel_ratio();
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(((width * dpr) as u32, (height * dpr) as u32))
}

/// Find or create the stage canvas, sized to fill the viewport.
pub fn attach_canvas() -> Option<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;

    // Remove loading indicator
    if let Some(loading) = document.get_element_by_id("loading") {
        loading.remove();
    }

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .or_else(|| {
            let app_div = document.get_element_by_id("app")?;
            let canvas = document.create_element("canvas").ok()?;
            canvas.set_id(CANVAS_ID);
            app_div.append_child(&canvas).ok()?;
            canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()
        })?;

    // Account for device pixel ratio for sharp rendering
    let (width, height) = viewport_physical_size()?;
    canvas.set_width(width);
    canvas.set_height(height);
    let style = canvas.style();
    let _ = style.set_property("width", "100%");
    let _ = style.set_property("height", "100%");
    let _ = style.set_property("display", "block");
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("top", "0");
    let _ = style.set_property("left", "0");

    log::info!("Canvas created: {}x{} physical", width, height);
    Some(canvas)
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting SHADOW×LIGHT (WASM)");

    let initial_params = params_from_url();
    if initial_params != UiParameters::default() {
        log::info!("Parameters from URL: {:?}", initial_params);
    }

    let config = AppConfig {
        initial_params,
        ..AppConfig::default()
    };
    crate::App::run(config).await;
}
