//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting SHADOW×LIGHT");

    pollster::block_on(shadowlight_app::App::run(shadowlight_app::AppConfig::default()));
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
