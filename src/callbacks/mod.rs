//! Reactive Bindings
//!
//! A declarative table that ties input controls to chart outputs. Each
//! [`Binding`] names the controls it reads, the chart it writes, and a plain
//! function that rebuilds that chart from the dataset and the current control
//! values.
//!
//! Bindings never share state and never look at previous results: whenever
//! a bound control changes, the chart is recomputed from scratch, so the same
//! control values always produce the same figure.

mod render;

pub use render::{render_payload_scatter, render_success_pie};

use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

use crate::chart::Figure;
use crate::dataset::Dataset;
use crate::layout::{ControlId, ControlValues, OutputId};

/// Rebuilds one chart from the dataset and the current control values
pub type RenderFn = fn(&Dataset, &ControlValues) -> Figure;

/// One row of the binding table
#[derive(Clone, Copy)]
pub struct Binding {
    /// Stable name used in logs and the dependency listing
    pub id: &'static str,
    /// Controls whose changes trigger this binding
    pub inputs: &'static [ControlId],
    /// Chart this binding writes
    pub output: OutputId,
    render: RenderFn,
}

impl Binding {
    pub const fn new(
        id: &'static str,
        inputs: &'static [ControlId],
        output: OutputId,
        render: RenderFn,
    ) -> Self {
        Self {
            id,
            inputs,
            output,
            render,
        }
    }

    /// Whether any of `changed` is one of this binding's inputs
    ///
    /// An empty `changed` list means the page just loaded and every
    /// binding fires.
    pub fn is_triggered_by(&self, changed: &[ControlId]) -> bool {
        changed.is_empty() || changed.iter().any(|c| self.inputs.contains(c))
    }

    /// Recompute this binding's chart
    pub fn render(&self, dataset: &Dataset, values: &ControlValues) -> Figure {
        let _span = tracing::debug_span!("recompute", binding = self.id, output = %self.output)
            .entered();
        let started = Instant::now();

        let figure = (self.render)(dataset, values);

        tracing::debug!(
            traces = figure.data.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Recomputed chart"
        );
        figure
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("id", &self.id)
            .field("inputs", &self.inputs)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

/// The dashboard's bindings
pub const BINDINGS: [Binding; 2] = [
    Binding::new(
        "success-pie",
        &[ControlId::SiteDropdown],
        OutputId::SuccessPieChart,
        render_success_pie,
    ),
    Binding::new(
        "payload-scatter",
        &[ControlId::SiteDropdown, ControlId::PayloadSlider],
        OutputId::SuccessPayloadScatterChart,
        render_payload_scatter,
    ),
];

/// Dispatches control changes to the bindings they trigger
#[derive(Debug, Clone)]
pub struct CallbackRegistry {
    bindings: Vec<Binding>,
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new(BINDINGS)
    }
}

impl CallbackRegistry {
    pub fn new(bindings: impl IntoIterator<Item = Binding>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Bindings that `changed` triggers, in table order
    pub fn triggered<'a>(
        &'a self,
        changed: &'a [ControlId],
    ) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings
            .iter()
            .filter(move |binding| binding.is_triggered_by(changed))
    }

    /// Recompute every chart triggered by `changed`
    ///
    /// Each triggered binding runs exactly once, even when several of its
    /// inputs changed in the same batch.
    pub fn dispatch(
        &self,
        dataset: &Dataset,
        values: &ControlValues,
        changed: &[ControlId],
    ) -> BTreeMap<OutputId, Figure> {
        self.triggered(changed)
            .map(|binding| (binding.output, binding.render(dataset, values)))
            .collect()
    }
}
