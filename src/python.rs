use pyo3::prelude::*;
use pyo3::types::PyModule;
use pyo3_polars::PyDataFrame;

use crate::config::AppConfig;
use crate::error::DashError;
use crate::model::records_to_dataframe;
use crate::pipeline::{generate_records, render_dashboard_html, seeded_rng};
use crate::schema;

/// Generate the default dataset as a Polars DataFrame.
///
/// `seed=None` falls back to the configured dataset seed (42), not entropy.
#[pyfunction]
#[pyo3(signature = (seed=None))]
fn generate_sales_data(seed: Option<u64>) -> PyResult<PyDataFrame> {
    let config = AppConfig::default();
    let mut rng = seeded_rng(seed.or(config.dataset_seed()));
    let records = generate_records(&config, &mut rng)?;
    let df = records_to_dataframe(&records).map_err(DashError::from)?;
    Ok(PyDataFrame(df))
}

/// Render the dashboard HTML with the default configuration.
#[pyfunction]
#[pyo3(signature = (seed=None))]
fn render_dashboard(seed: Option<u64>) -> PyResult<String> {
    let config = AppConfig::default();
    let mut rng = seeded_rng(seed.or(config.dashboard.seed));
    Ok(render_dashboard_html(&config, &mut rng)?)
}

/// The KPI summary document as a JSON string.
#[pyfunction]
fn kpi_summary() -> PyResult<String> {
    let json = AppConfig::default()
        .kpi
        .to_json()
        .map_err(DashError::from)?;
    Ok(json)
}

/// Export column and key constants as Python submodules
fn add_schema_exports(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Sales
    let sales = PyModule::new(m.py(), "sales")?;
    sales.add("MONTH", schema::sales::MONTH)?;
    sales.add("PRODUCT", schema::sales::PRODUCT)?;
    sales.add("REGION", schema::sales::REGION)?;
    sales.add("LATITUDE", schema::sales::LATITUDE)?;
    sales.add("LONGITUDE", schema::sales::LONGITUDE)?;
    sales.add("SALES", schema::sales::SALES)?;
    sales.add("FORECAST", schema::sales::FORECAST)?;
    sales.add("VARIANCE_PCT", schema::sales::VARIANCE_PCT)?;
    sales.add(
        "ORDER_PROCESSING_TIME",
        schema::sales::ORDER_PROCESSING_TIME,
    )?;
    m.add_submodule(&sales)?;

    // KPI
    let kpi = PyModule::new(m.py(), "kpi")?;
    kpi.add("ACTUALS_THIS_PERIOD", schema::kpi::ACTUALS_THIS_PERIOD)?;
    kpi.add("VARIANCE_TO_FORECAST", schema::kpi::VARIANCE_TO_FORECAST)?;
    kpi.add("PERIOD_OVER_PERIOD", schema::kpi::PERIOD_OVER_PERIOD)?;
    kpi.add("ORDER_PROCESSING_TIME", schema::kpi::ORDER_PROCESSING_TIME)?;
    m.add_submodule(&kpi)?;

    Ok(())
}

/// Module name matches the `[lib]` name so the `PyInit_` symbol resolves.
#[pymodule]
fn sales_dashkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_sales_data, m)?)?;
    m.add_function(wrap_pyfunction!(render_dashboard, m)?)?;
    m.add_function(wrap_pyfunction!(kpi_summary, m)?)?;
    add_schema_exports(m)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_name_matches_lib_name() {
        assert_eq!(env!("CARGO_CRATE_NAME"), "sales_dashkit");
    }

    #[test]
    fn test_kpi_summary_json() {
        let json = super::kpi_summary().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get(crate::schema::kpi::ACTUALS_THIS_PERIOD).is_some());
    }
}
