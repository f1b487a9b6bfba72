//! launchdash-common — Shared error taxonomy and configuration used across all launchdash crates.

pub mod error;
pub mod config;

// Re-export commonly used types
pub use error::{LaunchDashError, Result};
pub use config::{DashboardConfig, DataConfig, LayoutConfig, ServerConfig};
