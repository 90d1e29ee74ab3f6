use std::path::{Path, PathBuf};

use chrono::Month;
use serde::Deserialize;

use crate::dashboard::DashboardConfig;
use crate::error::DashError;
use crate::kpi::KpiSummary;
use crate::schema::files;

/// Default configuration embedded in the binaries.
const DEFAULT_CONFIG: &str = r#"
seed = 42
data_dir = "data"
output_dir = "outputs"
"#;

// ── Config types ────────────────────────────────────────────────────────────

/// Top-level configuration shared by both binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed for the dataset RNG. Ignored when `entropy` is set.
    pub seed: Option<u64>,
    /// Seed the dataset RNG from OS entropy instead of `seed`
    pub entropy: bool,
    /// Directory receiving `sales_data.csv` and `kpi_summary.json`
    pub data_dir: PathBuf,
    /// Directory receiving `dashboard.html`
    pub output_dir: PathBuf,
    pub dataset: DatasetConfig,
    pub kpi: KpiSummary,
    pub dashboard: DashboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: Some(42),
            entropy: false,
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("outputs"),
            dataset: DatasetConfig::default(),
            kpi: KpiSummary::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

/// A sales region with its reference point on the map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    #[serde(alias = "region")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Region {
    pub fn new(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
        }
    }
}

/// Dimensions and draw parameters of the synthetic dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Month labels, in output order
    pub months: Vec<String>,
    pub categories: Vec<String>,
    pub regions: Vec<Region>,
    /// Records per (month, category, region) cell
    pub trials: usize,
    /// Inclusive lower bound of sales draws
    pub sales_min: i64,
    /// Exclusive upper bound of sales draws
    pub sales_max: i64,
    /// Forecast multiplier band, both ends inclusive
    pub forecast_low: f64,
    pub forecast_high: f64,
    pub processing_mean: f64,
    pub processing_sd: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            months: fiscal_months(Month::April),
            categories: default_categories(),
            regions: default_regions(),
            trials: 30,
            sales_min: 10_000,
            sales_max: 500_000,
            forecast_low: 0.97,
            forecast_high: 1.03,
            processing_mean: 30.0,
            processing_sd: 2.0,
        }
    }
}

/// Three-letter month labels for a fiscal year starting at `start`.
pub fn fiscal_months(start: Month) -> Vec<String> {
    std::iter::successors(Some(start), |m| Some(m.succ()))
        .take(12)
        .map(|m| m.name()[..3].to_string())
        .collect()
}

pub fn default_categories() -> Vec<String> {
    [
        "Pasta & Pizza",
        "Canned Goods",
        "Soup",
        "Condiments",
        "Coffee & Snacks",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn default_regions() -> Vec<Region> {
    vec![
        Region::new("North America", 40.7128, -74.0060),
        Region::new("Europe", 48.8566, 2.3522),
        Region::new("South America", -23.5505, -46.6333),
        Region::new("Asia", 35.6895, 139.6917),
        Region::new("Africa", -1.2921, 36.8219),
        Region::new("Australia", -33.8688, 151.2093),
    ]
}

// ── Loading ─────────────────────────────────────────────────────────────────

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, DashError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `sales_dashkit.toml` from `dir`, falling back to the embedded default.
    pub fn load_from_dir(dir: &Path) -> Result<Self, DashError> {
        let path = dir.join(files::CONFIG);
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            return Self::from_toml_str(&contents);
        }
        tracing::debug!("{} not found, using embedded configuration", path.display());
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Load from the current working directory.
    pub fn load() -> Result<Self, DashError> {
        Self::load_from_dir(Path::new("."))
    }

    /// Seed for the dataset run; None means entropy.
    pub fn dataset_seed(&self) -> Option<u64> {
        if self.entropy {
            None
        } else {
            self.seed
        }
    }

    pub fn validate(&self) -> Result<(), DashError> {
        self.dataset.validate()?;
        self.dashboard.validate()
    }
}

impl DatasetConfig {
    /// Number of records one run produces.
    pub fn expected_len(&self) -> Result<usize, DashError> {
        self.months
            .len()
            .checked_mul(self.categories.len())
            .and_then(|n| n.checked_mul(self.regions.len()))
            .and_then(|n| n.checked_mul(self.trials))
            .ok_or_else(|| {
                invalid(&format!(
                    "{} months x {} categories x {} regions x {} trials overflows",
                    self.months.len(),
                    self.categories.len(),
                    self.regions.len(),
                    self.trials
                ))
            })
    }

    pub fn validate(&self) -> Result<(), DashError> {
        let labels = self
            .months
            .iter()
            .chain(self.categories.iter())
            .chain(self.regions.iter().map(|r| &r.name));
        for label in labels {
            if label.trim().is_empty() {
                return Err(invalid("dimension labels must not be blank"));
            }
        }
        for region in &self.regions {
            if !(-90.0..=90.0).contains(&region.lat) || !(-180.0..=180.0).contains(&region.lon) {
                return Err(invalid(&format!(
                    "region '{}' has coordinates out of range ({}, {})",
                    region.name, region.lat, region.lon
                )));
            }
        }
        if self.sales_min >= self.sales_max {
            return Err(invalid(&format!(
                "sales_min ({}) must be below sales_max ({})",
                self.sales_min, self.sales_max
            )));
        }
        if !self.forecast_low.is_finite()
            || !self.forecast_high.is_finite()
            || self.forecast_low < 0.0
            || self.forecast_low > self.forecast_high
            // the sampler widens the band by 1 / (1 - EPSILON)
            || !((self.forecast_high - self.forecast_low) / (1.0 - f64::EPSILON)).is_finite()
        {
            return Err(invalid(&format!(
                "forecast band [{}, {}] is not a valid range",
                self.forecast_low, self.forecast_high
            )));
        }
        if !self.processing_mean.is_finite()
            || !self.processing_sd.is_finite()
            || self.processing_sd < 0.0
        {
            return Err(invalid(&format!(
                "processing time N({}, {}) is not a valid distribution",
                self.processing_mean, self.processing_sd
            )));
        }
        self.expected_len()?;
        Ok(())
    }
}

fn invalid(msg: &str) -> DashError {
    DashError::InvalidConfig(msg.to_string())
}
