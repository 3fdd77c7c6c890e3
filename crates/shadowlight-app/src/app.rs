//! Application shell: window, GPU surface, egui controls and the parameter snapshot.

use shadowlight_core::{derive_style, DerivedStyle, StyleVars, UiParameters};
use shadowlight_render::{RenderResult, RendererError};
use std::sync::Arc;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::frame::{Compositor, Overlay};
use crate::ui::{render_ui, UiAction};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Parameter snapshot the session starts from.
    pub initial_params: UiParameters,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "SHADOW×LIGHT".to_string(),
            width: 1280,
            height: 800,
            initial_params: UiParameters::default(),
        }
    }
}

/// The current parameter snapshot and everything derived from it.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub params: UiParameters,
    pub style: DerivedStyle,
    pub vars: StyleVars,
}

impl ViewState {
    pub fn new(params: UiParameters) -> Self {
        let style = derive_style(&params);
        let vars = StyleVars::from_style(&params, &style);
        Self {
            params,
            style,
            vars,
        }
    }

    /// Apply a UI action. Returns true if the snapshot was replaced.
    pub fn apply(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::SetParameter(param, value) => {
                let next = self.params.with(param, value);
                if next == self.params {
                    return false;
                }
                log::debug!("{} -> {}", param.label(), next.get(param));
                *self = Self::new(next);
                true
            }
        }
    }
}

/// Push the style variables out to the page (WASM) or the log (native).
fn publish_style(vars: &StyleVars) {
    #[cfg(target_arch = "wasm32")]
    crate::web::apply_style_vars(vars);

    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("Style variables:\n{}", vars.to_css());
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    compositor: Compositor,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,

    // State
    view: ViewState,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    /// Flag to indicate async init is in progress
    #[cfg(target_arch = "wasm32")]
    init_in_progress: std::cell::Cell<bool>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            init_in_progress: std::cell::Cell::new(false),
        }
    }

    /// Run the application.
    pub async fn run(config: AppConfig) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let app = App::with_config(config);

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = app;
            event_loop.run_app(&mut app).expect("Event loop error");
        }
    }

    /// Finish initialization after surface is created.
    fn finish_init(
        &mut self,
        window: Arc<Window>,
        surface: RenderSurface<'static>,
    ) -> RenderResult<()> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| RendererError::InitFailed("no GPU context".into()))?;
        let device = &render_cx.devices[surface.dev_id].device;
        let compositor = Compositor::new(device, surface.config.format)?;

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let view = ViewState::new(self.config.initial_params);
        publish_style(&view.vars);

        log::info!(
            "SHADOW×LIGHT initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            compositor,
            egui_ctx,
            egui_state,
            view,
        });
        self.pending_window = None;

        window.request_redraw();
        Ok(())
    }

    /// Create the surface asynchronously once the browser window exists.
    #[cfg(target_arch = "wasm32")]
    fn start_async_init(&mut self, window: Arc<Window>) {
        if self.init_in_progress.get() {
            return;
        }
        self.init_in_progress.set(true);

        let (width, height) = crate::web::viewport_physical_size()
            .unwrap_or((self.config.width, self.config.height));

        // Get raw pointer to self for async callback
        let self_ptr = self as *mut Self;

        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Creating surface asynchronously...");

            let mut render_cx = vello::util::RenderContext::new();

            match render_cx
                .create_surface(window.clone(), width, height, PresentMode::AutoVsync)
                .await
            {
                Ok(surface) => {
                    log::info!("Surface created successfully");

                    let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };

                    // SAFETY: WASM is single-threaded and the event loop keeps
                    // the App alive.
                    let app = unsafe { &mut *self_ptr };
                    app.render_cx = Some(render_cx);
                    if let Err(e) = app.finish_init(window, surface) {
                        log::error!("{}", e);
                    }
                }
                Err(e) => {
                    log::error!("{}", RendererError::Surface(e.to_string()));
                    let app = unsafe { &mut *self_ptr };
                    app.init_in_progress.set(false);
                }
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        log::info!("Creating window...");

        #[cfg(not(target_arch = "wasm32"))]
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        // On WASM, attach canvas to DOM and use full viewport
        #[cfg(target_arch = "wasm32")]
        let window_attrs = {
            use winit::platform::web::WindowAttributesExtWebSys;

            let canvas = crate::web::attach_canvas().expect("Failed to create canvas");
            Window::default_attributes()
                .with_title(&self.config.title)
                .with_canvas(Some(canvas))
        };

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        log::info!("Window created, initializing renderer...");

        // On native, block on async surface creation
        #[cfg(not(target_arch = "wasm32"))]
        {
            let size = window.inner_size();
            let (width, height) = if size.width == 0 || size.height == 0 {
                (self.config.width, self.config.height)
            } else {
                (size.width, size.height)
            };
            log::info!("Surface size: {}x{}", width, height);

            let render_cx = self
                .render_cx
                .get_or_insert_with(vello::util::RenderContext::new);

            let result = pollster::block_on(render_cx.create_surface(
                window.clone(),
                width,
                height,
                PresentMode::AutoVsync,
            ))
            .map_err(|e| RendererError::Surface(e.to_string()))
            .and_then(|surface| {
                // Transmute lifetime to 'static - safe because App owns everything
                let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
                self.finish_init(window, surface)
            });

            if let Err(e) = result {
                log::error!("{}", e);
                event_loop.exit();
            }
        }

        // On WASM, store window for later async initialization
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // On WASM, handle async initialization
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            if let Some(window) = self.pending_window.clone() {
                self.start_async_init(window.clone());
                // Request redraw to keep the event loop running
                window.request_redraw();
            }
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                // Run egui and apply the control change, if any
                let egui_input = state.egui_state.take_egui_input(&state.window);
                let mut pending_action: Option<UiAction> = None;
                let egui_output = state.egui_ctx.run(egui_input, |ctx| {
                    if let Some(action) = render_ui(ctx, &state.view.params, &state.view.style) {
                        pending_action = Some(action);
                    }
                });

                let mut needs_redraw = egui_output
                    .viewport_output
                    .get(&egui::ViewportId::ROOT)
                    .is_some_and(|v| v.repaint_delay.is_zero());

                if let Some(action) = pending_action {
                    if state.view.apply(action) {
                        publish_style(&state.view.vars);
                        // The next egui pass must see the new text color.
                        needs_redraw = true;
                    }
                }

                state
                    .egui_state
                    .handle_platform_output(&state.window, egui_output.platform_output);
                let overlay = Overlay {
                    primitives: state
                        .egui_ctx
                        .tessellate(egui_output.shapes, egui_output.pixels_per_point),
                    textures: egui_output.textures_delta,
                    pixels_per_point: egui_output.pixels_per_point,
                };

                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                let device_handle = &render_cx.devices[state.surface.dev_id];

                if let Err(e) = state.compositor.render(
                    &device_handle.device,
                    &device_handle.queue,
                    &state.surface,
                    &state.view,
                    state.window.scale_factor(),
                    overlay,
                ) {
                    log::warn!("Frame skipped: {}", e);
                }

                if needs_redraw {
                    state.window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadowlight_core::{Parameter, TextColor};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert_eq!(config.initial_params, UiParameters::default());
    }

    #[test]
    fn test_view_state_starts_dark() {
        let view = ViewState::new(UiParameters::default());
        assert!(view.style.is_dark);
        assert_eq!(view.vars.get("--colorText"), Some("white"));
    }

    #[test]
    fn test_apply_replaces_snapshot_and_restyles() {
        let mut view = ViewState::new(UiParameters::default());
        let before = view.params;

        assert!(view.apply(UiAction::SetParameter(Parameter::BackgroundLightness, 100.0)));
        assert_eq!(before.background_lightness, 0.0);
        assert_eq!(view.params.background_lightness, 100.0);
        assert_eq!(view.style.text_color, TextColor::Black);
        assert_eq!(view.vars.get("--colorBg"), Some("hsl(0, 0%, 100%)"));
    }

    #[test]
    fn test_apply_same_value_is_noop() {
        let mut view = ViewState::new(UiParameters::default());
        assert!(!view.apply(UiAction::SetParameter(Parameter::ShadowStrength, 0.3)));
        assert!(!view.apply(UiAction::SetParameter(Parameter::ShapeCount, 0.0)));
    }

    #[test]
    fn test_apply_changes_one_field() {
        let mut view = ViewState::new(UiParameters::default());
        assert!(view.apply(UiAction::SetParameter(Parameter::ShapeCount, 3.0)));
        assert_eq!(view.params.shape_count, 3);
        assert_eq!(
            view.params,
            UiParameters {
                shape_count: 3,
                ..UiParameters::default()
            }
        );
    }
}
