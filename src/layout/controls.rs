//! Control and output identifiers
//!
//! The names that tie page components, bindings and update requests
//! together. Serialized in kebab-case (`site-dropdown`, `success-pie-chart`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dataset::{PayloadRange, SiteSelector};

/// An input control on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chart placeholder on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl OutputId {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every input control
///
/// Owned by the page; the server only reads it to recompute charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlValues {
    #[serde(rename = "site-dropdown")]
    pub site: SiteSelector,
    #[serde(rename = "payload-slider")]
    pub payload: PayloadRange,
}

impl ControlValues {
    pub fn new(site: SiteSelector, payload: PayloadRange) -> Self {
        Self { site, payload }
    }
}
