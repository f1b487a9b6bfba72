//! Chart specifications handed to the rendering host.
//! These describe what to draw; drawing is the host's job.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartSpec::Pie(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartSpec::Scatter(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass (kg)
    pub x: f64,
    /// Outcome class, 0 or 1
    pub y: u8,
    /// Booster version category; one colour per category
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub color_title: String,
    pub points: Vec<ScatterPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_is_tagged_by_kind() {
        let spec = ChartSpec::Pie(PieChart {
            title: "Total Success Launches By Site".into(),
            slices: vec![PieSlice { label: "KSC LC-39A".into(), value: 0.75 }],
        });
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["slices"][0]["value"], 0.75);
    }
}
