use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::SliderConfig;
use crate::controller::{
    dropdown_options, ChartBoard, ControlEvent, Controller, DropdownOption,
};
use crate::data::model::{LaunchDataset, PayloadRange};

// ---------------------------------------------------------------------------
// Desktop dashboard state
// ---------------------------------------------------------------------------

/// The full desktop UI state, independent of rendering.
pub struct DashboardState {
    /// Current control values and the chart builders behind them.
    pub controller: Controller,

    /// Latest chart pushed to each slot.
    pub charts: ChartBoard,

    /// Dropdown entries ("All Sites" first).
    pub site_options: Vec<DropdownOption>,

    /// Slider geometry.
    pub slider: SliderConfig,

    /// Slider handles as dragged; pushed to the controller on change.
    pub payload_input: [f64; 2],

    /// One colour per booster version category.
    pub category_colors: ColorMap,
}

impl DashboardState {
    pub fn new(dataset: Arc<LaunchDataset>, slider: SliderConfig) -> Self {
        let site_options = dropdown_options(dataset.sites());
        let category_colors =
            ColorMap::new(dataset.booster_categories().iter().map(String::as_str));
        let mut controller = Controller::new(dataset);
        let bounds = controller.controls().payload;

        let mut charts = ChartBoard::default();
        controller.render_all(&mut charts);

        Self {
            controller,
            charts,
            site_options,
            slider,
            payload_input: [bounds.min, bounds.max],
            category_colors,
        }
    }

    /// Dropdown value currently selected.
    pub fn selected_site(&self) -> &str {
        self.controller.controls().site.value()
    }

    pub fn select_site(&mut self, value: &str) {
        self.controller
            .handle(ControlEvent::SiteSelected(value.to_string()), &mut self.charts);
    }

    /// Push the slider handles to the controller.
    ///
    /// Handles dragged past each other are passed through unchanged; the
    /// scatter then simply shows no launches.
    pub fn commit_payload_input(&mut self) {
        let [lo, hi] = self.payload_input;
        self.controller.handle(
            ControlEvent::PayloadRangeChanged(PayloadRange::new(lo, hi)),
            &mut self.charts,
        );
    }

    /// Snap both handles back to the observed payload bounds.
    pub fn reset_payload(&mut self) {
        let bounds = self.controller.dataset().payload_bounds();
        self.payload_input = [bounds.min, bounds.max];
        self.commit_payload_input();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome, SiteSelection};

    fn state() -> DashboardState {
        let dataset = LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "FT"),
            LaunchRecord::new("B", 800.0, Outcome::Success, "v1.0"),
        ])
        .expect("dataset");
        DashboardState::new(Arc::new(dataset), SliderConfig::default())
    }

    #[test]
    fn starts_with_both_charts_rendered() {
        let s = state();
        assert_eq!(s.charts.pie().map(|p| p.slices.len()), Some(2));
        assert_eq!(s.charts.scatter().map(|c| c.point_count()), Some(3));
        assert_eq!(s.payload_input, [500.0, 1500.0]);
        assert_eq!(s.selected_site(), "ALL");
        assert_eq!(s.site_options.len(), 3);
    }

    #[test]
    fn selecting_a_site_updates_both_charts() {
        let mut s = state();
        s.select_site("B");
        assert_eq!(s.controller.controls().site, SiteSelection::Site("B".into()));
        assert_eq!(s.charts.pie().map(|p| p.total()), Some(1));
        assert_eq!(s.charts.scatter().map(|c| c.point_count()), Some(1));
    }

    #[test]
    fn slider_updates_scatter_and_reset_restores_bounds() {
        let mut s = state();
        s.payload_input = [0.0, 1000.0];
        s.commit_payload_input();
        assert_eq!(s.charts.scatter().map(|c| c.point_count()), Some(2));
        assert_eq!(s.charts.pie().map(|p| p.total()), Some(3));

        s.reset_payload();
        assert_eq!(s.payload_input, [500.0, 1500.0]);
        assert_eq!(s.charts.scatter().map(|c| c.point_count()), Some(3));
    }
}
