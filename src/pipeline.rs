//! The two runs: dataset generation and dashboard rendering.
//!
//! They share configuration but no data. Each run owns one RNG, seeded once
//! at the start and passed down by `&mut`.

use std::path::PathBuf;

use chrono::Month;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::charts::dashboard_charts;
use crate::config::{fiscal_months, AppConfig};
use crate::dashboard::render_dashboard;
use crate::error::DashError;
use crate::generator::SalesGenerator;
use crate::model::{records_to_dataframe, TransactionRecord};
use crate::output;
use crate::profile::DatasetProfile;
use crate::sample;
use crate::schema::files;

/// Seeded RNG, or one seeded from OS entropy when no seed is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// What a generation run wrote.
#[derive(Debug)]
pub struct GenerationReport {
    pub sales_csv: PathBuf,
    pub kpi_summary: PathBuf,
    pub profile: DatasetProfile,
}

/// Generate the records for `config` with the run's RNG.
pub fn generate_records<R: Rng + ?Sized>(
    config: &AppConfig,
    rng: &mut R,
) -> Result<Vec<TransactionRecord>, DashError> {
    SalesGenerator::new(&config.dataset)?.generate(rng)
}

/// Generate the dataset and write `sales_data.csv` plus `kpi_summary.json`.
pub fn run_data_generation(config: &AppConfig) -> Result<GenerationReport, DashError> {
    config.validate()?;
    let seed = config.dataset_seed();
    tracing::info!(seed = ?seed, "generating sales data");

    let mut rng = seeded_rng(seed);
    let records = generate_records(config, &mut rng)?;

    let mut df = records_to_dataframe(&records)?;
    let sales_csv = output::write_csv(&config.data_dir, files::SALES_DATA, &mut df)?;
    let kpi_summary = output::write_kpi_summary(&config.data_dir, &config.kpi)?;

    let profile = DatasetProfile::from_dataframe(&df)?;
    profile.log();

    Ok(GenerationReport {
        sales_csv,
        kpi_summary,
        profile,
    })
}

/// Build the charts from the presentation samples and render the page.
pub fn render_dashboard_html<R: Rng + ?Sized>(
    config: &AppConfig,
    rng: &mut R,
) -> Result<String, DashError> {
    let region_points = sample::region_points(rng);
    let scatter_points = sample::scatter_points(rng)?;
    let charts = dashboard_charts(
        &config.dashboard.chart_style(),
        &fiscal_months(Month::April),
        &region_points,
        &scatter_points,
    );
    render_dashboard(&charts, &config.kpi, &config.dashboard)
}

/// Render the dashboard and write `dashboard.html`.
pub fn run_dashboard(config: &AppConfig) -> Result<PathBuf, DashError> {
    config.validate()?;
    tracing::info!(seed = ?config.dashboard.seed, "rendering dashboard");

    let mut rng = seeded_rng(config.dashboard.seed);
    let html = render_dashboard_html(config, &mut rng)?;
    output::write_dashboard(&config.output_dir, &html)
}
