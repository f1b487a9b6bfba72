//! Control and output identities, and which outputs depend on which controls.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ControlId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    SuccessPayloadScatterChart,
}

impl ControlId {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recomputation rule binding: `output` is recomputed when any of `inputs` changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callback {
    pub output: OutputId,
    pub inputs: &'static [ControlId],
}

impl Callback {
    pub fn listens_to(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }
}

pub static CALLBACKS: [Callback; 2] = [
    Callback {
        output: OutputId::SuccessPieChart,
        inputs: &[ControlId::SiteDropdown],
    },
    Callback {
        output: OutputId::SuccessPayloadScatterChart,
        inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
    },
];

/// Outputs to recompute after `control` changes, in table order.
pub fn affected_outputs(control: ControlId) -> impl Iterator<Item = OutputId> {
    CALLBACKS
        .iter()
        .filter(move |cb| cb.listens_to(control))
        .map(|cb| cb.output)
}
