use serde::Serialize;

use super::site_rate_title;
use crate::data::filter::filter_by_site;
use crate::data::model::{LaunchDataset, Outcome, SiteSelection};

pub const ALL_SITES_TITLE: &str = "Total launches by site";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Fraction of the whole for each slice, in slice order.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.slices.len()];
        }
        self.slices
            .iter()
            .map(|s| s.value as f64 / total as f64)
            .collect()
    }
}

/// Build the success pie for the dropdown's selection.
///
/// * `All` → one slice per catalog site sized by its number of launches.
/// * a site → that site's launches split by outcome class, zero slices
///   dropped.
///
/// The payload slider never influences this chart.
pub fn pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => launches_by_site(dataset),
        SiteSelection::Site(name) => outcomes_at_site(dataset, site, name),
    }
}

fn launches_by_site(dataset: &LaunchDataset) -> PieChart {
    let slices = dataset
        .sites()
        .iter()
        .map(|name| PieSlice {
            label: name.to_string(),
            value: dataset.records().iter().filter(|r| r.site == name).count(),
        })
        .collect();

    PieChart {
        title: ALL_SITES_TITLE.to_string(),
        slices,
    }
}

fn outcomes_at_site(dataset: &LaunchDataset, site: &SiteSelection, name: &str) -> PieChart {
    let at_site = filter_by_site(dataset.records(), site);
    let slices = Outcome::ALL
        .iter()
        .map(|&outcome| PieSlice {
            label: outcome.to_string(),
            value: at_site.iter().filter(|r| r.outcome == outcome).count(),
        })
        .filter(|slice| slice.value > 0)
        .collect();

    PieChart {
        title: site_rate_title(name),
        slices,
    }
}
