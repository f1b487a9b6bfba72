//! Configuration loading for launchdash.
//! Reads launchdash.toml from the current directory; every field falls back to its default.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{LaunchDashError, Result};

/// File looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "launchdash.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

// ── Data ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Launch records CSV, relative to the working directory.
    #[serde(default = "default_data_path")]
    pub path: String,

    /// Fixed site domain. When set, it also fixes the dropdown order and
    /// every listed site must have at least one record.
    #[serde(default)]
    pub sites: Option<Vec<String>>,
}

fn default_data_path() -> String { "spacex_launch_dash.csv".to_string() }

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path(), sites: None }
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "bool_true")]
    pub debug: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 8050 }
fn bool_true()    -> bool   { true }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), debug: bool_true() }
    }
}

impl ServerConfig {
    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Layout ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
    /// Static gradation marks; not derived from the data.
    #[serde(default = "default_slider_marks")]
    pub slider_marks: Vec<u32>,
}

fn default_title()        -> String   { "SpaceX Launch Records Dashboard".to_string() }
fn default_slider_step()  -> f64      { 1000.0 }
fn default_slider_marks() -> Vec<u32> { vec![0, 2500, 5000, 7500, 10000] }

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            slider_step: default_slider_step(),
            slider_marks: default_slider_marks(),
        }
    }
}


impl DashboardConfig {
    /// Load launchdash.toml from the working directory, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_in(Path::new("."))
    }

    /// Same as [`load`](Self::load), looking in `dir` instead of the working directory.
    pub fn load_in(dir: &Path) -> Result<Self> {
        match Self::locate_in(dir) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Path of the config file in `dir`, if there is one.
    pub fn locate_in(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DashboardConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data.path.trim().is_empty() {
            return Err(LaunchDashError::Config("data.path must not be empty".into()));
        }
        if self.server.port == 0 {
            return Err(LaunchDashError::Config("server.port must be non-zero".into()));
        }
        if !(self.layout.slider_step.is_finite() && self.layout.slider_step > 0.0) {
            return Err(LaunchDashError::Config(format!(
                "layout.slider_step must be positive, got {}",
                self.layout.slider_step
            )));
        }
        if let Some(sites) = &self.data.sites {
            let mut seen = HashSet::new();
            for site in sites {
                if !seen.insert(site.as_str()) {
                    return Err(LaunchDashError::Config(format!(
                        "data.sites lists '{}' more than once",
                        site
                    )));
                }
            }
        }
        Ok(())
    }
}
