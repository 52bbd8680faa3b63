//! MovieLens Analytics Dashboard
//!
//! Serves the landing and business insights pages built from the analytics
//! pipeline's summary tables and pre-rendered visualizations.

pub mod cache;
pub mod check;
pub mod config;
pub mod editorial;
pub mod embed;
pub mod export;
pub mod page;
pub mod server;
pub mod summary;

pub use cache::{AssetsLayout, DashboardCache};
pub use server::{run_server, RequestsLoggingLevel};
