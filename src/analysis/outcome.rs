//! Success/failure aggregation

use serde::Serialize;

use super::site_records;
use crate::dataset::{Dataset, Outcome, SiteSelector};

/// Launch outcome tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub success: usize,
    pub failure: usize,
}

impl OutcomeCounts {
    /// Number of launches counted
    pub fn total(&self) -> usize {
        self.success + self.failure
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Failure => self.failure += 1,
        }
    }
}

/// Count successful and failed launches for the selected sites
///
/// A selector that matches nothing yields zero counts, not an error.
pub fn outcome_counts(dataset: &Dataset, site: &SiteSelector) -> OutcomeCounts {
    site_records(dataset, site).fold(OutcomeCounts::default(), |mut counts, record| {
        counts.record(record.outcome);
        counts
    })
}
