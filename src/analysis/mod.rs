//! Launch Analysis
//!
//! The two aggregations behind the dashboard charts. Both are pure
//! functions of the dataset and the current control values: every call
//! recomputes from the full table, nothing is cached between calls.
//!
//! - [`outcome_counts`]: success/failure tally for a site selector
//! - [`filter_launches`]: records matching a site selector and payload range

mod outcome;
mod payload;

pub use outcome::{outcome_counts, OutcomeCounts};
pub use payload::filter_launches;

use crate::dataset::{Dataset, LaunchRecord, SiteSelector};

/// Records launched from the sites covered by `site`, in dataset order
pub fn site_records<'a, 's>(
    dataset: &'a Dataset,
    site: &'s SiteSelector,
) -> impl Iterator<Item = &'a LaunchRecord> + 's
where
    'a: 's,
{
    dataset
        .records()
        .iter()
        .filter(move |record| site.matches(&record.launch_site))
}
