use std::io;
use std::path::Path;

use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord, Outcome};
use crate::error::LoadError;

/// Source column holding the launch site name.
pub const SITE_COLUMN: &str = "Launch Site";
/// Source column holding the payload mass.
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
/// Source column holding the 0/1 outcome.
pub const CLASS_COLUMN: &str = "class";
/// Source column holding the booster family used for colouring.
pub const CATEGORY_COLUMN: &str = "Booster Version Category";

/// Files that were already post-processed use the renamed site column.
const SITE_COLUMN_RENAMED: &str = "LaunchSite";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch record store from a CSV file.
///
/// Columns other than the ones mapped onto [`LaunchRecord`] (for instance the
/// unnamed index column pandas writes) are ignored.
pub fn load_csv(path: &Path) -> Result<LaunchDataset, LoadError> {
    let reader = csv_builder()
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let dataset = read_all(reader)?;
    log::info!(
        "Loaded {} launches from {} ({} sites, payload {}..{} kg)",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        dataset.payload_bounds().min,
        dataset.payload_bounds().max
    );
    Ok(dataset)
}

/// Same as [`load_csv`] for an in-memory or streamed source.
pub fn read_csv<R: io::Read>(source: R) -> Result<LaunchDataset, LoadError> {
    read_all(csv_builder().from_reader(source))
}

fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

// ---------------------------------------------------------------------------
// Row parsing & validation
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site", alias = "LaunchSite")]
    site: String,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

fn read_all<R: io::Read>(mut reader: csv::Reader<R>) -> Result<LaunchDataset, LoadError> {
    check_columns(reader.headers().map_err(LoadError::Header)?)?;

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        // 1-based data row, header excluded.
        let row = idx + 1;
        let raw = result.map_err(|source| LoadError::Row { row, source })?;
        records.push(validate(raw, row)?);
    }

    LaunchDataset::from_records(records)
}

fn check_columns(headers: &csv::StringRecord) -> Result<(), LoadError> {
    let has = |name: &str| headers.iter().any(|h| h == name);

    if !has(SITE_COLUMN) && !has(SITE_COLUMN_RENAMED) {
        return Err(LoadError::MissingColumn(SITE_COLUMN));
    }
    for column in [PAYLOAD_COLUMN, CLASS_COLUMN, CATEGORY_COLUMN] {
        if !has(column) {
            return Err(LoadError::MissingColumn(column));
        }
    }
    Ok(())
}

fn validate(raw: RawLaunchRow, row: usize) -> Result<LaunchRecord, LoadError> {
    let invalid = |reason: String| LoadError::Invalid { row, reason };

    if raw.site.is_empty() {
        return Err(invalid("empty launch site".into()));
    }
    if raw.booster_version_category.is_empty() {
        return Err(invalid("empty booster version category".into()));
    }
    if !raw.payload_mass_kg.is_finite() || raw.payload_mass_kg < 0.0 {
        return Err(invalid(format!(
            "payload mass {} is not a non-negative number",
            raw.payload_mass_kg
        )));
    }
    let outcome = Outcome::from_class(raw.class)
        .ok_or_else(|| invalid(format!("class {} is neither 0 nor 1", raw.class)))?;

    Ok(LaunchRecord {
        flight_number: raw.flight_number,
        site: raw.site,
        payload_mass_kg: raw.payload_mass_kg,
        outcome,
        booster_version: raw.booster_version.filter(|v| !v.is_empty()),
        booster_version_category: raw.booster_version_category,
    })
}
