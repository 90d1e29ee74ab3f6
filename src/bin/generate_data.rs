use sales_dashkit::pipeline::run_data_generation;
use sales_dashkit::{logging, AppConfig, DashError};

fn main() -> Result<(), DashError> {
    logging::initialize();

    let config = AppConfig::load()?;
    let report = run_data_generation(&config)?;

    tracing::info!(
        rows = report.profile.rows,
        "data generation complete: {}, {}",
        report.sales_csv.display(),
        report.kpi_summary.display()
    );
    Ok(())
}
