//! Chart builders: pure functions from the launch dataset and the current
//! control values to a renderable chart description.

pub mod pie;
pub mod scatter;

use serde::Serialize;

pub use pie::{pie_chart, PieChart, PieSlice};
pub use scatter::{scatter_chart, ScatterChart, ScatterPoint, ScatterSeries};

/// A chart description handed to a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }
}

impl From<PieChart> for ChartSpec {
    fn from(pie: PieChart) -> Self {
        ChartSpec::Pie(pie)
    }
}

impl From<ScatterChart> for ChartSpec {
    fn from(scatter: ScatterChart) -> Self {
        ChartSpec::Scatter(scatter)
    }
}

/// Title used for per-site charts.
pub(crate) fn site_rate_title(site: &str) -> String {
    format!("{site} success and failure rate")
}
