use super::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Filter predicates over launch records
// ---------------------------------------------------------------------------

/// Records launched from the selected site (every record for `All`).
pub fn filter_by_site<'a, I>(records: I, site: &SiteSelection) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|r| site.matches(&r.site))
        .collect()
}

/// Records whose payload lies in the inclusive `range`.
///
/// An inverted range yields an empty subset rather than an error.
pub fn filter_by_payload<'a, I>(records: I, range: PayloadRange) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .collect()
}

/// The subset plotted by the scatter chart.
///
/// The observed payload bounds are applied before the slider range; that
/// first pass never drops a record but keeps the pipeline shape the
/// dashboard has always had. The site filter runs last.
pub fn scatter_subset<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    let within_bounds = filter_by_payload(dataset.records(), dataset.payload_bounds());
    let in_range = filter_by_payload(within_bounds, range);
    filter_by_site(in_range, site)
}
