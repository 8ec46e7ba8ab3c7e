//! Core data types for the launch dataset
//!
//! This module defines the fundamental types shared by every layer:
//! - `LaunchRecord`: One launch attempt as read from the CSV
//! - `Outcome`: Binary launch result (the `class` column)
//! - `SiteSelector`: Either every site or one named site
//! - `PayloadRange`: Closed payload-mass interval in kilograms

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown for the all-sites choice in the dropdown
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Binary launch result
///
/// Stored in the CSV as the `class` column: `1` for success, `0` for failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class used as the y value of the scatter chart
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
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
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

/// A single launch attempt
///
/// Field names map onto the CSV header; any other columns in the file
/// are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name (e.g. "CCAFS LC-40")
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Booster family (e.g. "v1.1", "FT", "B5")
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// Launch result
    #[serde(rename = "class")]
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            outcome,
        }
    }
}

/// Which launch sites an aggregation covers
///
/// Serialized as `{"kind": "all_sites"}` or `{"kind": "site", "name": "..."}`
/// so that a site literally called "ALL" can never be confused with the
/// all-sites choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum SiteSelector {
    /// Every launch site
    #[default]
    AllSites,
    /// A single named launch site
    Site(String),
}

impl SiteSelector {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelector::Site(name.into())
    }

    /// Check whether a record launched from `site` falls under this selector
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::AllSites => true,
            SiteSelector::Site(name) => name == site,
        }
    }

    /// Human-readable label for the dropdown
    pub fn label(&self) -> &str {
        match self {
            SiteSelector::AllSites => ALL_SITES_LABEL,
            SiteSelector::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed payload-mass interval `[lo, hi]` in kilograms
///
/// Serialized as a two-element array, matching the range slider value.
/// An interval with `lo > hi` is valid and contains nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Inclusive on both ends
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.lo <= payload_mass_kg && payload_mass_kg <= self.hi
    }

    /// True when no payload can fall inside the interval
    pub fn is_empty(&self) -> bool {
        self.lo.is_nan() || self.hi.is_nan() || self.lo > self.hi
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.lo, range.hi]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] kg", self.lo, self.hi)
    }
}
