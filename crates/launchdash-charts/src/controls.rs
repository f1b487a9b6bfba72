//! Control values owned by the rendering host and passed into each rule.

use std::fmt;

use launchdash_common::{LaunchDashError, Result};
use launchdash_data::PayloadBounds;
use serde::{Deserialize, Serialize};

/// Sentinel dropdown value meaning "no site filter".
pub const ALL_SITES: &str = "All Sites";

/// Dropdown value: every site, or one named site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelection {
    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::AllSites => None,
            SiteSelection::Site(name) => Some(name),
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::AllSites => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed slider interval `[lo, hi]`. The scatter filter treats both ends as exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Full slider extent.
    pub fn from_bounds(bounds: PayloadBounds) -> Self {
        Self { lo: bounds.min, hi: bounds.max }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(LaunchDashError::InvalidSelection(format!(
                "payload range bounds must be finite, got [{}, {}]",
                self.lo, self.hi
            )));
        }
        if self.lo > self.hi {
            return Err(LaunchDashError::InvalidSelection(format!(
                "payload range is inverted: [{}, {}]",
                self.lo, self.hi
            )));
        }
        Ok(())
    }

    /// Strict on both ends: a payload equal to `lo` or `hi` is outside.
    pub fn admits(&self, payload: f64) -> bool {
        self.lo < payload && payload < self.hi
    }
}

/// Current value of every dashboard control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    #[serde(default)]
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// Defaults at layout-build time: all sites, full payload extent.
    pub fn initial(bounds: PayloadBounds) -> Self {
        Self {
            site: SiteSelection::AllSites,
            payload_range: PayloadRange::from_bounds(bounds),
        }
    }
}
