//! Payload vs. outcome scatter rule. Depends on the site selection and the payload range.

use launchdash_common::{LaunchDashError, Result};
use launchdash_data::LaunchRecord;
use tracing::debug;

use crate::chart::{ChartSpec, ScatterChart, ScatterPoint};
use crate::controls::{PayloadRange, SiteSelection};

pub const X_TITLE: &str = "Payload Mass (kg)";
pub const Y_TITLE: &str = "class";
pub const COLOR_TITLE: &str = "Booster Version Category";

/// One point per record that matches the site filter and lies strictly
/// inside `range`. An empty result is a valid chart.
///
/// A named site that appears in no record, an inverted range, or a
/// non-finite bound is an `InvalidSelection`.
pub fn compute_scatter_spec(
    selection: &SiteSelection,
    range: PayloadRange,
    records: &[LaunchRecord],
) -> Result<ChartSpec> {
    range.validate()?;
    if let Some(site) = selection.site() {
        if !records.iter().any(|r| r.site == site) {
            return Err(LaunchDashError::InvalidSelection(format!(
                "unknown launch site '{}'",
                site
            )));
        }
    }

    let points: Vec<ScatterPoint> = records
        .iter()
        .filter(|r| selection.site().map_or(true, |site| r.site == site))
        .filter(|r| range.admits(r.payload_mass_kg))
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: r.outcome.class(),
            category: r.booster_version_category.clone(),
        })
        .collect();

    debug!(
        site = %selection,
        lo = range.lo,
        hi = range.hi,
        points = points.len(),
        "scatter chart recomputed"
    );

    Ok(ChartSpec::Scatter(ScatterChart {
        title: format!("Correlation Between Payload and Success for {}", selection),
        x_title: X_TITLE.to_string(),
        y_title: Y_TITLE.to_string(),
        color_title: COLOR_TITLE.to_string(),
        points,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdash_data::Outcome;

    fn rec(site: &str, payload: f64, ok: bool, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.into(),
            payload_mass_kg: payload,
            outcome: if ok { Outcome::Success } else { Outcome::Failure },
            booster_version_category: booster.into(),
        }
    }

    fn records() -> Vec<LaunchRecord> {
        vec![
            rec("CCAFS LC-40", 0.0, false, "v1.0"),
            rec("CCAFS LC-40", 525.0, false, "v1.0"),
            rec("VAFB SLC-4E", 500.0, false, "v1.1"),
            rec("VAFB SLC-4E", 9600.0, true, "FT"),
            rec("KSC LC-39A", 2490.0, true, "FT"),
            rec("KSC LC-39A", 5600.0, false, "FT"),
            rec("CCAFS SLC-40", 4707.0, true, "B5"),
            rec("CCAFS SLC-40", 1898.0, false, "B4"),
        ]
    }

    fn points(spec: &ChartSpec) -> &[ScatterPoint] {
        &spec.as_scatter().unwrap().points
    }

    #[test]
    fn test_all_sites_applies_payload_filter() {
        let spec = compute_scatter_spec(&SiteSelection::AllSites, PayloadRange::new(400.0, 5000.0), &records()).unwrap();
        let xs: Vec<f64> = points(&spec).iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![525.0, 500.0, 2490.0, 4707.0, 1898.0]);
    }

    #[test]
    fn test_site_filter_and_point_fields() {
        let spec = compute_scatter_spec(
            &SiteSelection::Site("KSC LC-39A".into()),
            PayloadRange::new(0.0, 10000.0),
            &records(),
        )
        .unwrap();
        let chart = spec.as_scatter().unwrap();

        assert_eq!(chart.title, "Correlation Between Payload and Success for KSC LC-39A");
        assert_eq!(
            chart.points,
            vec![
                ScatterPoint { x: 2490.0, y: 1, category: "FT".into() },
                ScatterPoint { x: 5600.0, y: 0, category: "FT".into() },
            ]
        );
    }

    #[test]
    fn test_boundary_payloads_excluded() {
        // 0.0 and 9600.0 sit exactly on the full-extent bounds
        let spec = compute_scatter_spec(&SiteSelection::AllSites, PayloadRange::new(0.0, 9600.0), &records()).unwrap();
        let xs: Vec<f64> = points(&spec).iter().map(|p| p.x).collect();
        assert!(!xs.contains(&0.0));
        assert!(!xs.contains(&9600.0));
        assert_eq!(xs.len(), records().len() - 2);
    }

    #[test]
    fn test_empty_intersection_is_not_an_error() {
        let spec = compute_scatter_spec(&SiteSelection::AllSites, PayloadRange::new(9700.0, 9900.0), &records()).unwrap();
        assert!(points(&spec).is_empty());

        let spec = compute_scatter_spec(
            &SiteSelection::Site("CCAFS LC-40".into()),
            PayloadRange::new(9000.0, 9500.0),
            &records(),
        )
        .unwrap();
        assert!(points(&spec).is_empty());
    }

    #[test]
    fn test_narrowing_never_grows_output() {
        let records = records();
        let mut previous = usize::MAX;
        let mut range = PayloadRange::new(-1.0, 10001.0);
        while range.lo <= range.hi {
            let n = points(&compute_scatter_spec(&SiteSelection::AllSites, range, &records).unwrap()).len();
            assert!(n <= records.len());
            assert!(n <= previous, "{:?} produced {} > {}", range, n, previous);
            previous = n;
            range = PayloadRange::new(range.lo + 250.0, range.hi - 250.0);
        }
    }

    #[test]
    fn test_invalid_selections() {
        let records = records();
        let unknown = compute_scatter_spec(&SiteSelection::Site("Mars".into()), PayloadRange::new(0.0, 1.0), &records);
        assert!(matches!(unknown, Err(LaunchDashError::InvalidSelection(_))));

        let inverted = compute_scatter_spec(&SiteSelection::AllSites, PayloadRange::new(5000.0, 100.0), &records);
        assert!(matches!(inverted, Err(LaunchDashError::InvalidSelection(_))));
    }
}
