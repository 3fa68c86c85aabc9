use eframe::egui;
use worknet::app::Worknet;
use worknet::config::Config;

fn main() -> eframe::Result<()> {
    env_logger::init();

    if let Err(e) = Config::create_default() {
        log::warn!("could not write default config: {}", e);
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("worknet"),
        ..Default::default()
    };

    eframe::run_native(
        "worknet",
        options,
        Box::new(move |cc| Ok(Box::new(Worknet::new(cc, config)))),
    )
}
