use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::LoadError;

/// Dropdown value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome as recorded in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Both outcomes in class order (0 first).
    pub const ALL: [Outcome; 2] = [Outcome::Failure, Outcome::Success];

    /// Interpret a raw `class` cell. Only exactly 0 and 1 are accepted.
    pub fn from_class(class: f64) -> Option<Self> {
        if class == 0.0 {
            Some(Outcome::Failure)
        } else if class == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single launch, validated at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: Option<String>,
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Shorthand for the four columns the dashboard actually reads.
    pub fn new(site: &str, payload_mass_kg: f64, outcome: Outcome, category: &str) -> Self {
        Self {
            flight_number: None,
            site: site.to_string(),
            payload_mass_kg,
            outcome,
            booster_version: None,
            booster_version_category: category.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// SiteCatalog – distinct launch sites
// ---------------------------------------------------------------------------

/// Distinct launch sites in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SiteCatalog {
    sites: Vec<String>,
}

impl SiteCatalog {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LaunchRecord>,
    {
        Self {
            sites: distinct_in_order(records.into_iter().map(|r| r.site.as_str())),
        }
    }

    pub fn contains(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for v in values {
        if !seen.iter().any(|s| s == v) {
            seen.push(v.to_string());
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// The dropdown's current choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Resolve a raw dropdown value against the catalog.
    ///
    /// Anything that is neither `ALL` nor a known site falls back to `All`.
    pub fn resolve(value: &str, catalog: &SiteCatalog) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else if catalog.contains(value) {
            SiteSelection::Site(value.to_string())
        } else {
            log::warn!("Unknown launch site '{value}', showing all sites");
            SiteSelection::All
        }
    }

    /// The dropdown value this selection corresponds to.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl Serialize for SiteSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

/// Inclusive payload interval in kilograms.
///
/// `min > max` (or a NaN bound) is representable and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        self.min <= payload_kg && payload_kg <= self.max
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the immutable context shared by filters and charts
// ---------------------------------------------------------------------------

/// All loaded launches plus the catalogs derived from them.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: SiteCatalog,
    booster_categories: Vec<String>,
    payload_bounds: PayloadRange,
}

impl LaunchDataset {
    /// Build the derived catalogs. An empty record list has no payload
    /// bounds and is rejected.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        let first = records.first().ok_or(LoadError::NoRecords)?;
        let mut bounds = PayloadRange::new(first.payload_mass_kg, first.payload_mass_kg);
        for r in &records {
            bounds.min = bounds.min.min(r.payload_mass_kg);
            bounds.max = bounds.max.max(r.payload_mass_kg);
        }

        let sites = SiteCatalog::from_records(&records);
        let booster_categories =
            distinct_in_order(records.iter().map(|r| r.booster_version_category.as_str()));

        Ok(Self {
            records,
            sites,
            booster_categories,
            payload_bounds: bounds,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &SiteCatalog {
        &self.sites
    }

    /// Booster version categories in order of first appearance.
    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    /// Observed `[min, max]` payload over every record.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
