use std::sync::Arc;

use eframe::egui;

use crate::config::SliderConfig;
use crate::data::model::LaunchDataset;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: DashboardState,
}

impl DashboardApp {
    pub fn new(dataset: Arc<LaunchDataset>, slider: SliderConfig) -> Self {
        Self {
            state: DashboardState::new(dataset, slider),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let pie_height = ui.available_height() * 0.45;
            ui.allocate_ui(egui::vec2(ui.available_width(), pie_height), |ui| {
                plot::success_pie(ui, self.state.charts.pie());
            });
            ui.separator();
            plot::payload_scatter(
                ui,
                self.state.charts.scatter(),
                &self.state.category_colors,
            );
        });
    }
}
