#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

mod config;
mod error;
mod font;
mod menu;

#[cfg(target_os = "macos")]
mod app;
#[cfg(target_os = "macos")]
mod macos_font;
#[cfg(target_os = "macos")]
mod statusbar;

use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg(target_os = "macos")]
fn main() {
    use objc2::runtime::ProtocolObject;
    use objc2_app_kit::{NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate};
    use objc2_foundation::MainThreadMarker;

    init_logging();

    let mtm = MainThreadMarker::new().expect("must run on main thread");

    let app = NSApplication::sharedApplication(mtm);
    // No Dock icon and no main window, whatever happens to the font.
    app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);

    let delegate = app::AppDelegate::new(config::IndicatorConfig::default(), mtm);
    let delegate_proto: &ProtocolObject<dyn NSApplicationDelegate> =
        ProtocolObject::from_ref(&*delegate);
    app.setDelegate(Some(delegate_proto));

    app.run();
}

#[cfg(not(target_os = "macos"))]
fn main() {
    init_logging();
    tracing::error!("velocity is a macOS menu bar agent and only runs on macOS");
    std::process::exit(1);
}
