//! The loaded dataset plus its layout, and dispatch of control changes to rules.

use std::collections::BTreeMap;

use launchdash_common::{LayoutConfig, Result};
use launchdash_data::Dataset;
use tracing::{error, warn};

use crate::callbacks::{affected_outputs, ControlId, OutputId};
use crate::chart::ChartSpec;
use crate::controls::{ControlState, PayloadRange, SiteSelection};
use crate::layout::{build_layout, LayoutTree};
use crate::pie::compute_pie_spec;
use crate::scatter::compute_scatter_spec;

/// Read-only after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    layout: LayoutTree,
}

impl Dashboard {
    pub fn new(dataset: Dataset, config: &LayoutConfig) -> Self {
        let layout = build_layout(&dataset.sites, dataset.bounds, config);
        Self { dataset, layout }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &LayoutTree {
        &self.layout
    }

    pub fn initial_state(&self) -> ControlState {
        ControlState::initial(self.dataset.bounds)
    }

    pub fn pie(&self, site: &SiteSelection) -> Result<ChartSpec> {
        compute_pie_spec(site, &self.dataset.summaries)
    }

    pub fn scatter(&self, site: &SiteSelection, range: PayloadRange) -> Result<ChartSpec> {
        compute_scatter_spec(site, range, &self.dataset.records)
    }

    /// Run the rule that produces `output` against `state`.
    pub fn recompute(&self, output: OutputId, state: &ControlState) -> Result<ChartSpec> {
        match output {
            OutputId::SuccessPieChart => self.pie(&state.site),
            OutputId::SuccessPayloadScatterChart => self.scatter(&state.site, state.payload_range),
        }
    }

    /// Recompute every output bound to `changed`.
    ///
    /// An output whose rule fails is left out of the result, so the host keeps
    /// showing its previous chart. A rejected selection is expected traffic;
    /// anything else points at a broken dataset and is logged as an error.
    pub fn dispatch(&self, changed: ControlId, state: &ControlState) -> BTreeMap<OutputId, ChartSpec> {
        let mut updates = BTreeMap::new();
        for output in affected_outputs(changed) {
            match self.recompute(output, state) {
                Ok(spec) => {
                    updates.insert(output, spec);
                }
                Err(e) if e.is_recoverable() => warn!(%changed, %output, "no update: {}", e),
                Err(e) => error!(%changed, %output, "rule failed: {}", e),
            }
        }
        updates
    }

    /// Every chart for the initial control values, for first paint.
    pub fn initial_charts(&self) -> BTreeMap<OutputId, ChartSpec> {
        let state = self.initial_state();
        self.layout
            .graphs()
            .into_iter()
            .filter_map(|output| self.recompute(output, &state).ok().map(|spec| (output, spec)))
            .collect()
    }
}
