//! Numfall desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Numfall application.

use numfall_app::NumfallApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.numfall.numfall";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((720.0, 640.0))
            .with_min_inner_size((360.0, 320.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Numfall",
        options,
        Box::new(|cc| Ok(Box::new(NumfallApp::new(cc)))),
    )
}
