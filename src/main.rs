use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("sketchrule v{} starting", env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_title("Sketchrule"),
        ..Default::default()
    };
    eframe::run_native(
        "Sketchrule",
        native_options,
        Box::new(|cc| Ok(Box::new(sketchrule::app::SketchApp::new(cc)))),
    )
}
