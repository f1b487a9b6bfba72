//! Success pie chart rule. Depends on the site selection only.

use std::collections::BTreeMap;

use launchdash_common::{LaunchDashError, Result};
use launchdash_data::SiteSummary;
use tracing::debug;

use crate::chart::{ChartSpec, PieChart, PieSlice};
use crate::controls::SiteSelection;

pub const ALL_SITES_TITLE: &str = "Total Success Launches By Site";
pub const SUCCESS_LABEL: &str = "Success";
pub const FAIL_LABEL: &str = "Fail";

/// All sites: one slice per site valued at its success ratio, so the slices
/// need not sum to 1. One site: success vs. fail slices summing to 1.
pub fn compute_pie_spec(
    selection: &SiteSelection,
    summaries: &BTreeMap<String, SiteSummary>,
) -> Result<ChartSpec> {
    let chart = match selection {
        SiteSelection::AllSites => PieChart {
            title: ALL_SITES_TITLE.to_string(),
            slices: summaries
                .values()
                .map(|s| PieSlice { label: s.site.clone(), value: s.success })
                .collect(),
        },
        SiteSelection::Site(name) => {
            let summary = summaries.get(name).ok_or_else(|| {
                LaunchDashError::InvalidSelection(format!("unknown launch site '{}'", name))
            })?;
            PieChart {
                title: format!("Total Success Launches By {}", name),
                slices: vec![
                    PieSlice { label: SUCCESS_LABEL.to_string(), value: summary.success },
                    PieSlice { label: FAIL_LABEL.to_string(), value: summary.failure },
                ],
            }
        }
    };

    debug!(site = %selection, slices = chart.slices.len(), "pie chart recomputed");
    Ok(ChartSpec::Pie(chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdash_data::{aggregate, LaunchRecord, Outcome};
    use pretty_assertions::assert_eq;

    fn summaries() -> BTreeMap<String, SiteSummary> {
        let rec = |site: &str, ok: bool| LaunchRecord {
            site: site.into(),
            payload_mass_kg: 500.0,
            outcome: if ok { Outcome::Success } else { Outcome::Failure },
            booster_version_category: "FT".into(),
        };
        let records = vec![rec("Site A", true), rec("Site A", false), rec("Site B", true), rec("Site B", true)];
        aggregate(&records, None).unwrap()
    }

    #[test]
    fn test_all_sites_one_slice_per_site() {
        let spec = compute_pie_spec(&SiteSelection::AllSites, &summaries()).unwrap();
        let pie = spec.as_pie().unwrap();

        assert_eq!(pie.title, "Total Success Launches By Site");
        assert_eq!(
            pie.slices,
            vec![
                PieSlice { label: "Site A".into(), value: 0.5 },
                PieSlice { label: "Site B".into(), value: 1.0 },
            ]
        );
        // sum of success ratios, not 1
        assert_eq!(pie.total(), 1.5);
    }

    #[test]
    fn test_single_site_success_vs_fail() {
        let spec = compute_pie_spec(&SiteSelection::Site("Site A".into()), &summaries()).unwrap();
        let pie = spec.as_pie().unwrap();

        assert_eq!(pie.title, "Total Success Launches By Site A");
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Success", "Fail"]);
        assert!((pie.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_site_pie_sums_to_one() {
        let summaries = summaries();
        for site in summaries.keys() {
            let spec = compute_pie_spec(&SiteSelection::Site(site.clone()), &summaries).unwrap();
            let pie = spec.as_pie().unwrap();
            assert_eq!(pie.slices.len(), 2);
            assert!((pie.total() - 1.0).abs() < 1e-9, "{site}");
        }
    }

    #[test]
    fn test_unknown_site_is_invalid_selection() {
        let err = compute_pie_spec(&SiteSelection::Site("Boca Chica".into()), &summaries()).unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, LaunchDashError::InvalidSelection(_)));
    }
}
