//! Launch table loader.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io::Read;
use std::path::Path;

use launchdash_common::{LaunchDashError, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::record::{LaunchRecord, Outcome, PayloadBounds};
use crate::summary::{aggregate, SiteSummary};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

/// Columns that must be present in the header row. Others are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN];

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster: String,
}

/// Everything derived from the launch table at startup. Read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<LaunchRecord>,
    /// Keyed and ordered by site name
    pub summaries: BTreeMap<String, SiteSummary>,
    pub bounds: PayloadBounds,
    /// Dropdown order: the configured list, or the sorted distinct sites
    pub sites: Vec<String>,
}

impl Dataset {
    /// Load the launch table at `path`.
    ///
    /// `sites` fixes the site domain when given; see [`Dataset::from_reader`].
    pub fn load(path: impl AsRef<Path>, sites: Option<&[String]>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading launch records from {:?}", path);

        let file = std::fs::File::open(path).map_err(|e| {
            LaunchDashError::DataLoad(format!("cannot open {}: {}", path.display(), e))
        })?;
        let dataset = Self::from_reader(file, sites)?;

        info!(
            "Loaded {} launch records across {} sites from {}",
            dataset.records.len(),
            dataset.sites.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse CSV content and derive summaries and bounds.
    ///
    /// Fails with `DataLoad` on a missing column, an unparseable row, an
    /// outcome other than 0/1, a negative or non-finite payload, a site
    /// outside `sites`, or an empty table. Fails with `Aggregation` when a
    /// configured site has no rows.
    pub fn from_reader<R: Read>(reader: R, sites: Option<&[String]>) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| LaunchDashError::DataLoad(format!("cannot read header row: {}", e)))?;
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(LaunchDashError::DataLoad(format!(
                "missing required columns: {}",
                missing.join(", ")
            )));
        }

        let allowed: Option<HashSet<&str>> =
            sites.map(|s| s.iter().map(String::as_str).collect());

        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<RawRow>().enumerate() {
            // header is line 1
            let line = i + 2;
            let row = row.map_err(|e| {
                LaunchDashError::DataLoad(format!("line {}: {}", line, e))
            })?;
            records.push(validate_row(row, line, allowed.as_ref())?);
        }

        let bounds = PayloadBounds::from_records(&records)
            .ok_or_else(|| LaunchDashError::DataLoad("launch table has no rows".into()))?;
        let summaries = aggregate(&records, sites)?;
        let sites = match sites {
            Some(list) => list.to_vec(),
            None => records
                .iter()
                .map(|r| r.site.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
        };

        Ok(Self { records, summaries, bounds, sites })
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.summaries.contains_key(site)
    }

    pub fn total_successes(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }
}

fn validate_row(row: RawRow, line: usize, allowed: Option<&HashSet<&str>>) -> Result<LaunchRecord> {
    if row.site.is_empty() {
        return Err(LaunchDashError::DataLoad(format!("line {}: empty {}", line, SITE_COLUMN)));
    }
    if let Some(allowed) = allowed {
        if !allowed.contains(row.site.as_str()) {
            return Err(LaunchDashError::DataLoad(format!(
                "line {}: unknown launch site '{}'",
                line, row.site
            )));
        }
    }
    if !row.payload.is_finite() || row.payload < 0.0 {
        return Err(LaunchDashError::DataLoad(format!(
            "line {}: invalid {} {}",
            line, PAYLOAD_COLUMN, row.payload
        )));
    }
    let outcome = Outcome::from_class(row.class).ok_or_else(|| {
        LaunchDashError::DataLoad(format!(
            "line {}: {} must be 0 or 1, got {}",
            line, CLASS_COLUMN, row.class
        ))
    })?;

    Ok(LaunchRecord {
        site: row.site,
        payload_mass_kg: row.payload,
        outcome,
        booster_version_category: row.booster,
    })
}
