//! Reactive controller: binds the dropdown and the payload slider to the
//! chart builders and pushes fresh charts to a rendering surface.
//!
//! ```text
//!   dropdown ──────────┬──► pie builder ─────► surface (success-pie-chart)
//!                      │
//!   payload slider ────┴──► scatter builder ─► surface (success-payload-scatter-chart)
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::chart::{pie_chart, scatter_chart, ChartSpec, PieChart, ScatterChart};
use crate::config::SliderConfig;
use crate::data::model::{LaunchDataset, PayloadRange, SiteCatalog, SiteSelection, ALL_SITES};

// ---------------------------------------------------------------------------
// Controls, chart slots and their bindings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    SiteDropdown,
    PayloadSlider,
}

/// Where a chart is displayed on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartSlot {
    SuccessPie,
    PayloadScatter,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 2] = [ChartSlot::SuccessPie, ChartSlot::PayloadScatter];

    /// Element id of the slot on the page.
    pub fn id(self) -> &'static str {
        match self {
            ChartSlot::SuccessPie => "success-pie-chart",
            ChartSlot::PayloadScatter => "success-payload-scatter-chart",
        }
    }

    /// Controls this slot is recomputed from.
    pub fn inputs(self) -> &'static [Control] {
        match self {
            ChartSlot::SuccessPie => &[Control::SiteDropdown],
            ChartSlot::PayloadScatter => &[Control::SiteDropdown, Control::PayloadSlider],
        }
    }

    pub fn depends_on(self, control: Control) -> bool {
        self.inputs().contains(&control)
    }
}

/// Current value of every control for one UI session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl ControlState {
    /// All sites and the observed payload bounds.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload: dataset.payload_bounds(),
        }
    }
}

/// A value change coming from the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    SiteSelected(String),
    PayloadRangeChanged(PayloadRange),
}

impl ControlEvent {
    pub fn control(&self) -> Control {
        match self {
            ControlEvent::SiteSelected(_) => Control::SiteDropdown,
            ControlEvent::PayloadRangeChanged(_) => Control::PayloadSlider,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering surface
// ---------------------------------------------------------------------------

/// Anything able to display a chart in a slot.
pub trait RenderSurface {
    fn present(&mut self, slot: ChartSlot, chart: ChartSpec);
}

/// Surface keeping the latest chart of each slot.
#[derive(Debug, Clone, Default)]
pub struct ChartBoard {
    pie: Option<PieChart>,
    scatter: Option<ScatterChart>,
}

impl ChartBoard {
    pub fn pie(&self) -> Option<&PieChart> {
        self.pie.as_ref()
    }

    pub fn scatter(&self) -> Option<&ScatterChart> {
        self.scatter.as_ref()
    }
}

impl RenderSurface for ChartBoard {
    fn present(&mut self, slot: ChartSlot, chart: ChartSpec) {
        match (slot, chart) {
            (ChartSlot::SuccessPie, ChartSpec::Pie(pie)) => self.pie = Some(pie),
            (ChartSlot::PayloadScatter, ChartSpec::Scatter(scatter)) => {
                self.scatter = Some(scatter)
            }
            (slot, chart) => log::warn!(
                "Dropping chart '{}' presented to mismatched slot {}",
                chart.title(),
                slot.id()
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Recomputing,
}

/// Owns one session's control values over a shared, read-only dataset.
#[derive(Debug, Clone)]
pub struct Controller {
    dataset: Arc<LaunchDataset>,
    controls: ControlState,
    phase: Phase,
}

impl Controller {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let controls = ControlState::initial(&dataset);
        Self {
            dataset,
            controls,
            phase: Phase::Idle,
        }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Update a control value without rendering.
    ///
    /// Returns the control that actually changed, or `None` when the event
    /// left every value as it was. Unknown sites select all sites; ranges
    /// with a NaN bound are ignored.
    pub fn apply(&mut self, event: ControlEvent) -> Option<Control> {
        let control = event.control();
        match event {
            ControlEvent::SiteSelected(value) => {
                let site = SiteSelection::resolve(&value, self.dataset.sites());
                if site == self.controls.site {
                    return None;
                }
                self.controls.site = site;
            }
            ControlEvent::PayloadRangeChanged(range) => {
                if range.min.is_nan() || range.max.is_nan() {
                    log::warn!("Ignoring payload range with NaN bound: {range:?}");
                    return None;
                }
                if range == self.controls.payload {
                    return None;
                }
                self.controls.payload = range;
            }
        }
        Some(control)
    }

    /// Apply `event` and re-render every chart bound to the changed control.
    ///
    /// Returns the slots that were pushed to the surface.
    pub fn handle(
        &mut self,
        event: ControlEvent,
        surface: &mut impl RenderSurface,
    ) -> Vec<ChartSlot> {
        let Some(control) = self.apply(event) else {
            return Vec::new();
        };
        let slots: Vec<ChartSlot> = ChartSlot::ALL
            .into_iter()
            .filter(|slot| slot.depends_on(control))
            .collect();
        self.render(&slots, surface);
        slots
    }

    /// Push both charts, as on first page load.
    pub fn render_all(&mut self, surface: &mut impl RenderSurface) {
        self.render(&ChartSlot::ALL, surface);
    }

    pub fn render(&mut self, slots: &[ChartSlot], surface: &mut impl RenderSurface) {
        self.phase = Phase::Recomputing;
        for &slot in slots {
            let chart = self.build(slot);
            log::debug!(
                "Recomputed {} for site={} payload={:?}",
                slot.id(),
                self.controls.site,
                self.controls.payload
            );
            surface.present(slot, chart);
        }
        self.phase = Phase::Idle;
    }

    /// Build the chart for `slot` from the current control values.
    pub fn build(&self, slot: ChartSlot) -> ChartSpec {
        match slot {
            ChartSlot::SuccessPie => pie_chart(&self.dataset, &self.controls.site).into(),
            ChartSlot::PayloadScatter => {
                scatter_chart(&self.dataset, &self.controls.site, self.controls.payload).into()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Control descriptors for surfaces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// "All Sites" followed by one option per catalog site.
pub fn dropdown_options(catalog: &SiteCatalog) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(catalog.iter().map(|site| DropdownOption {
        label: site.to_string(),
        value: site.to_string(),
    }))
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderDescriptor {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub marks: Vec<u32>,
    pub value: [f64; 2],
}

/// Everything a surface needs to draw both controls in their current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlsDescriptor {
    pub dropdown: Vec<DropdownOption>,
    pub site: String,
    pub slider: SliderDescriptor,
}

impl ControlsDescriptor {
    pub fn new(catalog: &SiteCatalog, slider: SliderConfig, controls: &ControlState) -> Self {
        Self {
            dropdown: dropdown_options(catalog),
            site: controls.site.value().to_string(),
            slider: SliderDescriptor {
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks: slider.marks(),
                value: [controls.payload.min, controls.payload.max],
            },
        }
    }
}
