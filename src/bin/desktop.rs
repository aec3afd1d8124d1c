use std::sync::Arc;

use anyhow::Context;
use eframe::egui;
use spacex_dash::{app::DashboardApp, config, data::loader};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = config::load_settings();
    let dataset = loader::load_csv(&settings.data_path)
        .inspect_err(|e| log::error!("Failed to load launch data: {e}"))
        .with_context(|| format!("loading {}", settings.data_path.display()))?;
    let dataset = Arc::new(dataset);
    let slider = settings.slider;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dataset, slider)))),
    )
    .map_err(|e| anyhow::anyhow!("desktop dashboard failed: {e}"))
}
