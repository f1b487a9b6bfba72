//! launchdash-charts — Dashboard layout and the chart recomputation rules.
//!
//! The rules are pure functions of the current control values and the
//! read-only dataset; the rendering host decides when to call them.

pub mod chart;
pub mod controls;
pub mod layout;
pub mod pie;
pub mod scatter;
pub mod callbacks;
pub mod dashboard;

pub use callbacks::{Callback, ControlId, OutputId, CALLBACKS};
pub use chart::{ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint};
pub use controls::{ControlState, PayloadRange, SiteSelection, ALL_SITES};
pub use dashboard::Dashboard;
pub use layout::{build_layout, Component, LayoutTree};
pub use pie::compute_pie_spec;
pub use scatter::compute_scatter_spec;
