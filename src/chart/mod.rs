//! Chart Figures
//!
//! Serializable figure descriptions consumed by Plotly.js in the browser.
//! The server only builds `{"data": [...], "layout": {...}}` documents;
//! all drawing happens client-side.
//!
//! - [`success_pie`]: success vs. failure proportions
//! - [`payload_scatter`]: payload mass against outcome, coloured by booster

mod palette;
mod pie;
mod scatter;

pub use palette::{ColorMap, SET1};
pub use pie::{pie_title, success_pie, FAILURE_LABEL, SUCCESS_LABEL};
pub use scatter::{payload_scatter, OUTCOME_AXIS_LABEL, PAYLOAD_AXIS_LABEL, SCATTER_TITLE};

use serde::Serialize;

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

/// One data series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub legendgroup: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    pub marker: Marker,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl FigureLayout {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
            xaxis: None,
            yaxis: None,
            legend: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
    pub tracegrouporder: String,
}
