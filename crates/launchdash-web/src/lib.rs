//! launchdash-web — HTTP host for the launch records dashboard.
//! Provides:
//!   - The dashboard page rendered from the layout tree
//!   - Layout and chart recomputation endpoints
//!   - Dataset summary and health endpoints

pub mod router;
pub mod handlers;
pub mod state;
pub mod error;
