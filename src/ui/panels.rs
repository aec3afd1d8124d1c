use eframe::egui::{self, RichText, Ui};

use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Left side panel – control widgets
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Launch site");
    ui.separator();

    let current = state.selected_site().to_string();
    let current_label = state
        .site_options
        .iter()
        .find(|o| o.value == current)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| current.clone());

    // Clone the options so the state can be mutated from inside the combo box.
    let options = state.site_options.clone();
    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(current_label)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &options {
                if ui
                    .selectable_label(option.value == current, &option.label)
                    .clicked()
                {
                    state.select_site(&option.value);
                }
            }
        });

    ui.add_space(12.0);
    ui.heading("Payload range (kg)");
    ui.separator();

    let range = f64::from(state.slider.min)..=f64::from(state.slider.max);
    let step = f64::from(state.slider.step);
    let mut changed = false;

    let [lo, hi] = &mut state.payload_input;
    changed |= ui
        .add(egui::Slider::new(lo, range.clone()).step_by(step).text("min"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(hi, range).step_by(step).text("max"))
        .changed();

    if changed {
        state.commit_payload_input();
    }

    if ui.small_button("Reset to observed payloads").clicked() {
        state.reset_payload();
    }

    if state.payload_input[0] > state.payload_input[1] {
        ui.label(RichText::new("min is above max: no launches match").weak());
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dataset summary bar.
pub fn top_bar(ui: &mut Ui, state: &DashboardState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("SpaceX Launch Records Dashboard");
        ui.separator();

        let dataset = state.controller.dataset();
        let bounds = dataset.payload_bounds();
        ui.label(format!(
            "{} launches from {} sites, payload {}–{} kg",
            dataset.len(),
            dataset.sites().len(),
            bounds.min,
            bounds.max
        ));

        if let Some(scatter) = state.charts.scatter() {
            ui.separator();
            ui.label(format!("{} plotted", scatter.point_count()));
        }
    });
}
