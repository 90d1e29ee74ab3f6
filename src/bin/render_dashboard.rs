use sales_dashkit::pipeline::run_dashboard;
use sales_dashkit::{logging, AppConfig, DashError};

fn main() -> Result<(), DashError> {
    logging::initialize();

    let config = AppConfig::load()?;
    let path = run_dashboard(&config)?;

    tracing::info!("dashboard saved to {}", path.display());
    Ok(())
}
