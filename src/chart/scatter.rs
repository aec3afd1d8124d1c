use serde::Serialize;

use super::site_rate_title;
use crate::data::filter::scatter_subset;
use crate::data::loader::{CATEGORY_COLUMN, CLASS_COLUMN, PAYLOAD_COLUMN};
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

pub const ALL_SITES_TITLE: &str = "Success payload scatter";
/// Field shown when hovering a point.
pub const HOVER_FIELD: &str = "LaunchSite";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Payload mass in kg.
    pub x: f64,
    /// Outcome class, 0 or 1.
    pub y: f64,
    /// Launch site of the record.
    pub hover: String,
}

/// All points sharing one booster version category (one colour).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_field: String,
    pub hover_field: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Every point paired with its category.
    pub fn points(&self) -> impl Iterator<Item = (&str, &ScatterPoint)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(move |p| (s.category.as_str(), p)))
    }
}

/// Build the payload-vs-outcome scatter for the current controls.
///
/// Series follow the dataset's category order so colours stay stable while
/// the filters change; categories without points are left out.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let subset = scatter_subset(dataset, site, range);

    let series = dataset
        .booster_categories()
        .iter()
        .filter_map(|category| {
            let points: Vec<ScatterPoint> = subset
                .iter()
                .filter(|r| &r.booster_version_category == category)
                .map(|r| ScatterPoint {
                    x: r.payload_mass_kg,
                    y: f64::from(r.outcome.class()),
                    hover: r.site.clone(),
                })
                .collect();
            (!points.is_empty()).then(|| ScatterSeries {
                category: category.clone(),
                points,
            })
        })
        .collect();

    let title = match site {
        SiteSelection::All => ALL_SITES_TITLE.to_string(),
        SiteSelection::Site(name) => site_rate_title(name),
    };

    ScatterChart {
        title,
        x_label: PAYLOAD_COLUMN.to_string(),
        y_label: CLASS_COLUMN.to_string(),
        color_field: CATEGORY_COLUMN.to_string(),
        hover_field: HOVER_FIELD.to_string(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("B", 800.0, Outcome::Success, "FT"),
            LaunchRecord::new("B", 950.0, Outcome::Failure, "v1.0"),
        ])
        .expect("dataset")
    }

    fn flat(chart: &ScatterChart) -> Vec<(&str, &str, f64, f64)> {
        chart
            .points()
            .map(|(cat, p)| (cat, p.hover.as_str(), p.x, p.y))
            .collect()
    }

    #[test]
    fn all_sites_plots_every_record_in_range_grouped_by_category() {
        let chart = scatter_chart(&dataset(), &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
        assert_eq!(
            flat(&chart),
            [
                ("v1.0", "A", 500.0, 1.0),
                ("v1.0", "B", 950.0, 0.0),
                ("FT", "B", 800.0, 1.0),
            ]
        );
        assert_eq!(chart.title, ALL_SITES_TITLE);
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, "class");
        assert_eq!(chart.color_field, "Booster Version Category");
        assert_eq!(chart.hover_field, "LaunchSite");
    }

    #[test]
    fn site_selection_restricts_points() {
        let chart = scatter_chart(
            &dataset(),
            &SiteSelection::Site("A".into()),
            PayloadRange::new(0.0, 10_000.0),
        );
        assert_eq!(
            flat(&chart),
            [("v1.0", "A", 500.0, 1.0), ("v1.1", "A", 1500.0, 0.0)]
        );
        assert_eq!(chart.title, "A success and failure rate");
    }

    #[test]
    fn empty_subset_gives_chart_without_series() {
        let chart = scatter_chart(&dataset(), &SiteSelection::All, PayloadRange::new(5000.0, 6000.0));
        assert!(chart.series.is_empty());
        assert_eq!(chart.point_count(), 0);
    }
}
