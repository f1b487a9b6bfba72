//! Launch record types.

use serde::{Deserialize, Serialize};

/// Binary launch outcome, stored as `class` (1 = success, 0 = failure) in the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Numeric class value, used as the scatter chart's y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

/// One row of the launch table. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: String,
    /// Payload mass in kg (finite, ≥ 0)
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

/// Observed payload extent across all records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// `None` when there are no records.
    pub fn from_records(records: &[LaunchRecord]) -> Option<Self> {
        let mut iter = records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(payload: f64) -> LaunchRecord {
        LaunchRecord {
            site: "KSC LC-39A".into(),
            payload_mass_kg: payload,
            outcome: Outcome::Success,
            booster_version_category: "FT".into(),
        }
    }

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
    }

    #[test]
    fn test_bounds_span_all_records() {
        let records = vec![record(2500.0), record(0.0), record(9600.0), record(500.0)];
        let bounds = PayloadBounds::from_records(&records).unwrap();
        assert_eq!(bounds, PayloadBounds { min: 0.0, max: 9600.0 });
    }

    #[test]
    fn test_bounds_single_record() {
        let bounds = PayloadBounds::from_records(&[record(3170.0)]).unwrap();
        assert_eq!(bounds.min, bounds.max);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(PayloadBounds::from_records(&[]).is_none());
    }
}
