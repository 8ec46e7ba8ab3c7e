//! Page Layout
//!
//! The static description of the dashboard page: title, site dropdown,
//! success pie placeholder, payload slider and scatter placeholder. It is
//! built once from the dataset and served as JSON; the page script turns
//! it into DOM elements.

mod controls;
mod page;

pub use controls::{ControlId, ControlValues, OutputId};
pub use page::INDEX_HTML;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::{Dataset, PayloadRange, SiteSelector};

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site";
pub const SLIDER_LABEL: &str = "Payload range (Kg):";

/// Fixed slider bounds in kilograms
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 1_000.0;

/// One entry of the site dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: SiteSelector,
}

impl From<SiteSelector> for DropdownOption {
    fn from(value: SiteSelector) -> Self {
        Self {
            label: value.label().to_string(),
            value,
        }
    }
}

/// Inline style for the page heading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingStyle {
    #[serde(rename = "textAlign")]
    pub text_align: String,
    pub color: String,
    #[serde(rename = "fontSize")]
    pub font_size: u32,
}

/// A page component, in document order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Heading {
        text: String,
        style: HeadingStyle,
    },
    Dropdown {
        id: ControlId,
        options: Vec<DropdownOption>,
        value: SiteSelector,
        placeholder: String,
        searchable: bool,
    },
    Graph {
        id: OutputId,
    },
    Paragraph {
        text: String,
    },
    RangeSlider {
        id: ControlId,
        min: f64,
        max: f64,
        step: f64,
        marks: BTreeMap<String, String>,
        value: PayloadRange,
    },
    Break,
}

/// The full page layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub children: Vec<Component>,
}

/// Dropdown options: "All Sites" first, then each site in first-seen order
pub fn site_options(dataset: &Dataset) -> Vec<DropdownOption> {
    std::iter::once(SiteSelector::AllSites)
        .chain(dataset.sites().iter().map(SiteSelector::site))
        .map(DropdownOption::from)
        .collect()
}

/// Control values the page starts with: all sites, observed payload bounds
pub fn initial_values(dataset: &Dataset) -> ControlValues {
    ControlValues::new(SiteSelector::AllSites, dataset.payload_bounds())
}

impl Layout {
    /// Build the page layout for a dataset
    pub fn build(dataset: &Dataset) -> Self {
        let initial = initial_values(dataset);

        let marks = [SLIDER_MIN, SLIDER_MAX]
            .iter()
            .map(|mark| (mark.to_string(), mark.to_string()))
            .collect();

        let children = vec![
            Component::Heading {
                text: PAGE_TITLE.to_string(),
                style: HeadingStyle {
                    text_align: "center".to_string(),
                    color: "#503D36".to_string(),
                    font_size: 40,
                },
            },
            Component::Dropdown {
                id: ControlId::SiteDropdown,
                options: site_options(dataset),
                value: initial.site,
                placeholder: DROPDOWN_PLACEHOLDER.to_string(),
                searchable: true,
            },
            Component::Break,
            Component::Graph {
                id: OutputId::SuccessPieChart,
            },
            Component::Break,
            Component::Paragraph {
                text: SLIDER_LABEL.to_string(),
            },
            Component::RangeSlider {
                id: ControlId::PayloadSlider,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks,
                value: initial.payload,
            },
            Component::Graph {
                id: OutputId::SuccessPayloadScatterChart,
            },
        ];

        Self {
            title: PAGE_TITLE.to_string(),
            children,
        }
    }

    /// Ids of every chart placeholder on the page
    pub fn outputs(&self) -> Vec<OutputId> {
        self.children
            .iter()
            .filter_map(|c| match c {
                Component::Graph { id } => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Ids of every input control on the page
    pub fn controls(&self) -> Vec<ControlId> {
        self.children
            .iter()
            .filter_map(|c| match c {
                Component::Dropdown { id, .. } | Component::RangeSlider { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 525.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("ALL", 2490.0, "FT", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 6070.0, "FT", Outcome::Success),
        ])
        .unwrap()
    }

    #[test]
    fn test_site_options() {
        let options = site_options(&dataset());

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "All Sites");
        assert_eq!(options[0].value, SiteSelector::AllSites);
        assert_eq!(options[1].value, SiteSelector::site("CCAFS LC-40"));
        // A site literally named "ALL" stays distinct from the all-sites choice
        assert_eq!(options[2].label, "ALL");
        assert_eq!(options[2].value, SiteSelector::site("ALL"));
        assert_ne!(options[2].value, options[0].value);
    }

    #[test]
    fn test_layout_defaults() {
        let layout = Layout::build(&dataset());

        assert_eq!(layout.title, PAGE_TITLE);
        assert_eq!(
            layout.outputs(),
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
        assert_eq!(
            layout.controls(),
            vec![ControlId::SiteDropdown, ControlId::PayloadSlider]
        );

        let slider = layout
            .children
            .iter()
            .find_map(|c| match c {
                Component::RangeSlider {
                    min, max, step, value, ..
                } => Some((*min, *max, *step, *value)),
                _ => None,
            })
            .unwrap();
        assert_eq!(slider, (0.0, 10_000.0, 1_000.0, PayloadRange::new(525.0, 6070.0)));
    }

    #[test]
    fn test_layout_json() {
        let json = serde_json::to_value(Layout::build(&dataset())).unwrap();
        let children = json["children"].as_array().unwrap();

        assert_eq!(children[0]["component"], "heading");
        assert_eq!(children[1]["component"], "dropdown");
        assert_eq!(children[1]["id"], "site-dropdown");
        assert_eq!(children[1]["value"]["kind"], "all_sites");
        assert_eq!(children[6]["component"], "range_slider");
        assert_eq!(children[6]["marks"]["10000"], "10000");
        assert_eq!(children[6]["value"], serde_json::json!([525.0, 6070.0]));
    }
}
