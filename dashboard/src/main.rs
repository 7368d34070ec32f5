use dashboard::ui::DashboardApp;
use dashboard::utils::logger;

fn main() -> eframe::Result<()> {
    if let Err(e) = logger::init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Spenddeck")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spenddeck",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
