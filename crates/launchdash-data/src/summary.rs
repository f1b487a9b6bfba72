//! Per-site success / failure aggregation.

use std::collections::BTreeMap;

use launchdash_common::{LaunchDashError, Result};
use serde::{Deserialize, Serialize};

use crate::record::LaunchRecord;

/// Success and failure proportions for one launch site.
/// `success + failure == 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
    /// successes / launches, in [0, 1]
    pub success: f64,
    /// 1 - success
    pub failure: f64,
}

impl SiteSummary {
    fn from_counts(site: &str, launches: usize, successes: usize) -> Result<Self> {
        if launches == 0 {
            return Err(LaunchDashError::Aggregation(format!(
                "site '{}' has no launch records",
                site
            )));
        }
        let success = successes as f64 / launches as f64;
        Ok(Self {
            site: site.to_string(),
            launches,
            successes,
            success,
            failure: 1.0 - success,
        })
    }
}

/// Group records by site and compute each site's success ratio.
///
/// With `sites = Some(..)` every listed site gets a summary and a listed site
/// without records is an `Aggregation` error. With `None` the groups are the
/// distinct sites present in `records`.
pub fn aggregate(
    records: &[LaunchRecord],
    sites: Option<&[String]>,
) -> Result<BTreeMap<String, SiteSummary>> {
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    if let Some(sites) = sites {
        for site in sites {
            counts.insert(site.as_str(), (0, 0));
        }
    }

    for record in records {
        let entry = counts.entry(record.site.as_str()).or_insert((0, 0));
        entry.0 += 1;
        if record.outcome.is_success() {
            entry.1 += 1;
        }
    }

    counts
        .into_iter()
        .map(|(site, (launches, successes))| {
            SiteSummary::from_counts(site, launches, successes).map(|s| (site.to_string(), s))
        })
        .collect()
}
