//! Synthetic sales data and a static KPI dashboard.
//!
//! Two independent runs share one configuration: `pipeline::run_data_generation`
//! writes the sales table and KPI summary, `pipeline::run_dashboard` renders
//! `dashboard.html` from its own presentation samples.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod kpi;
pub mod logging;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod profile;
pub mod sample;
pub mod schema;

#[cfg(feature = "python")]
mod python;

pub use config::{AppConfig, DatasetConfig, Region};
pub use error::DashError;
pub use generator::SalesGenerator;
pub use kpi::KpiSummary;
pub use model::TransactionRecord;
