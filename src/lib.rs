//! # SpaceX Dash
//!
//! An interactive web dashboard over historical SpaceX launch outcomes.
//!
//! The launch table is loaded once from CSV into an immutable [`Dataset`].
//! The browser page holds two controls, a launch-site dropdown and a payload
//! range slider, and two charts. Every control change is posted to the server,
//! which looks up the affected bindings and recomputes their charts from
//! scratch.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the core record types
//! - [`analysis`]: Success/failure counting and payload filtering
//! - [`chart`]: Plotly figure builders
//! - [`layout`]: Page components and control identifiers
//! - [`callbacks`]: Control-to-chart binding table
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spacex_dash::{filter_launches, outcome_counts, Dataset, PayloadRange, SiteSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load("spacex_launch_dash.csv")?;
//!
//!     let counts = outcome_counts(&dataset, &SiteSelector::site("KSC LC-39A"));
//!     println!("{} successes, {} failures", counts.success, counts.failure);
//!
//!     let heavy = filter_launches(
//!         &dataset,
//!         &SiteSelector::AllSites,
//!         &PayloadRange::new(5000.0, 10000.0),
//!     );
//!     println!("{} launches carried 5-10 t", heavy.len());
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod callbacks;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod layout;

// Re-export top-level types for convenience
pub use dataset::{
    Dataset, DatasetError, DatasetResult, DatasetStats, LaunchRecord, Outcome, PayloadRange,
    SiteSelector,
};

pub use analysis::{filter_launches, outcome_counts, OutcomeCounts};

pub use chart::{payload_scatter, success_pie, ColorMap, Figure, Trace};

pub use layout::{ControlId, ControlValues, Layout, OutputId};

pub use callbacks::{Binding, CallbackRegistry, BINDINGS};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};
