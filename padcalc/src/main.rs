//! padcalc — a single-screen keypad calculator

use eframe::NativeOptions;
use padcalc::app::PadCalcApp;
use padcore::PadConfig;

fn main() -> eframe::Result<()> {
    let path = PadConfig::default_path();
    let (config, config_err) = match PadConfig::read(&path) {
        Ok(found) => (found.unwrap_or_default(), None),
        Err(err) => (PadConfig::default(), Some(err)),
    };

    padcore::logging::init(&config.log_filter);
    if let Some(err) = config_err {
        tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting padcalc");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            padcore::PadTheme::default().apply(&cc.egui_ctx);
            Box::new(PadCalcApp::new(cc, config))
        }),
    )
}
