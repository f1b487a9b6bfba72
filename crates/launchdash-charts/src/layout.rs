//! Declarative dashboard layout consumed by the rendering host.

use std::collections::BTreeMap;

use launchdash_common::LayoutConfig;
use launchdash_data::PayloadBounds;
use serde::{Deserialize, Serialize};

use crate::callbacks::{ControlId, OutputId};
use crate::controls::{PayloadRange, SiteSelection, ALL_SITES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: String,
    /// Options can be narrowed by typing
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: ControlId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Mark position -> label
    pub marks: BTreeMap<u32, String>,
    pub value: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Heading { text: String, style: TextStyle },
    Dropdown(Dropdown),
    Graph { id: OutputId },
    Paragraph { text: String },
    RangeSlider(RangeSlider),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTree {
    pub children: Vec<Component>,
}

impl LayoutTree {
    pub fn dropdown(&self) -> Option<&Dropdown> {
        self.children.iter().find_map(|c| match c {
            Component::Dropdown(d) => Some(d),
            _ => None,
        })
    }

    pub fn range_slider(&self) -> Option<&RangeSlider> {
        self.children.iter().find_map(|c| match c {
            Component::RangeSlider(s) => Some(s),
            _ => None,
        })
    }

    pub fn graphs(&self) -> Vec<OutputId> {
        self.children
            .iter()
            .filter_map(|c| match c {
                Component::Graph { id } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

/// Build the dashboard tree. Slider extent comes from `bounds`; its marks
/// come from `config` and do not follow the data.
///
/// Cannot fail for finite `bounds` with `min <= max`.
pub fn build_layout(sites: &[String], bounds: PayloadBounds, config: &LayoutConfig) -> LayoutTree {
    debug_assert!(bounds.min <= bounds.max, "payload bounds inverted: {:?}", bounds);

    let options = std::iter::once(ALL_SITES.to_string())
        .chain(sites.iter().cloned())
        .map(|site| DropdownOption { label: site.clone(), value: site })
        .collect();

    let marks = config
        .slider_marks
        .iter()
        .map(|m| (*m, m.to_string()))
        .collect();

    LayoutTree {
        children: vec![
            Component::Heading {
                text: config.title.clone(),
                style: TextStyle {
                    text_align: "center".to_string(),
                    color: "#503D36".to_string(),
                    font_size: 40,
                },
            },
            Component::Dropdown(Dropdown {
                id: ControlId::SiteDropdown,
                options,
                value: SiteSelection::AllSites,
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            }),
            Component::LineBreak,
            Component::Graph { id: OutputId::SuccessPieChart },
            Component::LineBreak,
            Component::Paragraph { text: "Payload range (Kg):".to_string() },
            Component::RangeSlider(RangeSlider {
                id: ControlId::PayloadSlider,
                min: bounds.min,
                max: bounds.max,
                step: config.slider_step,
                marks,
                value: PayloadRange::from_bounds(bounds),
            }),
            Component::Graph { id: OutputId::SuccessPayloadScatterChart },
        ],
    }
}
