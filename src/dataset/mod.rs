//! Launch Dataset
//!
//! The immutable, in-memory table of launch records that every chart is
//! computed from. Loaded once at startup, then shared read-only.
//!
//! ## Components
//!
//! - **Types**: `LaunchRecord`, `Outcome`, `SiteSelector`, `PayloadRange`
//! - **Loader**: CSV parsing with required-column checks
//! - **Dataset**: Records plus derived payload bounds, sites and booster categories

mod error;
mod loader;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::REQUIRED_COLUMNS;
pub use types::{LaunchRecord, Outcome, PayloadRange, SiteSelector, ALL_SITES_LABEL};

use std::fmt;

/// The loaded launch table
///
/// Constructed once and never mutated; aggregation functions receive it by
/// reference, and the API layer shares it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    payload_bounds: PayloadRange,
    sites: Vec<String>,
    booster_categories: Vec<String>,
}

impl Dataset {
    /// Build a dataset from already-parsed records
    ///
    /// Fails with [`DatasetError::Empty`] when there are no records, since
    /// the payload bounds would be undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();

        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);

            // First-seen order
            if !sites.contains(&record.launch_site) {
                sites.push(record.launch_site.clone());
            }
            if !booster_categories.contains(&record.booster_version_category) {
                booster_categories.push(record.booster_version_category.clone());
            }
        }

        Ok(Self {
            records,
            payload_bounds: PayloadRange::new(min_payload, max_payload),
            sites,
            booster_categories,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass in the table (default lower slider bound)
    pub fn min_payload(&self) -> f64 {
        self.payload_bounds.lo
    }

    /// Largest payload mass in the table (default upper slider bound)
    pub fn max_payload(&self) -> f64 {
        self.payload_bounds.hi
    }

    /// `[min_payload, max_payload]`
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    /// Distinct launch sites, in first-seen order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Distinct booster version categories, in first-seen order
    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    /// Summary statistics for logging and health reporting
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            records: self.records.len(),
            sites: self.sites.len(),
            booster_categories: self.booster_categories.len(),
            successes: self
                .records
                .iter()
                .filter(|r| r.outcome.is_success())
                .count(),
            min_payload: self.min_payload(),
            max_payload: self.max_payload(),
        }
    }
}

/// Dataset statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DatasetStats {
    pub records: usize,
    pub sites: usize,
    pub booster_categories: usize,
    pub successes: usize,
    pub min_payload: f64,
    pub max_payload: f64,
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} launches ({} successful) from {} sites, {} booster categories, payload {}-{} kg",
            self.records,
            self.successes,
            self.sites,
            self.booster_categories,
            self.min_payload,
            self.max_payload
        )
    }
}
