//! Payload range filtering

use super::site_records;
use crate::dataset::{Dataset, LaunchRecord, PayloadRange, SiteSelector};

/// Launches from the selected sites whose payload lies in `range`
///
/// Both ends of the range are inclusive. Records keep their dataset order.
/// An inverted range (`lo > hi`) returns an empty subset.
pub fn filter_launches<'a>(
    dataset: &'a Dataset,
    site: &SiteSelector,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    if range.is_empty() {
        return Vec::new();
    }

    site_records(dataset, site)
        .filter(|record| range.contains(record.payload_mass_kg))
        .collect()
}
