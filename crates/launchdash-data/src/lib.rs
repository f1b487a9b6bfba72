//! Launch records loading and per-site aggregation.
//!
//! Reads the launch table once at startup and derives everything the
//! dashboard needs from it:
//!
//! | Output | Derived from |
//! |--------|--------------|
//! | `records` | one [`LaunchRecord`] per CSV row |
//! | `summaries` | success / failure ratio per launch site |
//! | `bounds` | min and max payload mass over all rows |
//!
//! # Example
//!
//! ```rust,no_run
//! use launchdash_data::Dataset;
//!
//! fn main() -> launchdash_common::Result<()> {
//!     let dataset = Dataset::load("spacex_launch_dash.csv", None)?;
//!
//!     for (site, summary) in &dataset.summaries {
//!         println!("{}: {:.2} success", site, summary.success);
//!     }
//!     println!("payload range: {} – {} kg", dataset.bounds.min, dataset.bounds.max);
//!
//!     Ok(())
//! }
//! ```

pub mod record;
pub mod loader;
pub mod summary;

pub use loader::{Dataset, REQUIRED_COLUMNS};
pub use record::{LaunchRecord, Outcome, PayloadBounds};
pub use summary::{aggregate, SiteSummary};
