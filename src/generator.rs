//! Synthetic transaction generator.
//!
//! Enumerates every (month, category, region) cell of a `DatasetConfig` and
//! draws `trials` records per cell from the caller's RNG. Output order is the
//! nesting order: month, then category, then region, then trial.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

use crate::config::{DatasetConfig, Region};
use crate::error::DashError;
use crate::model::TransactionRecord;

/// Upper bound on the up-front `Vec` reservation; larger runs grow as they go.
const MAX_PREALLOCATED_RECORDS: usize = 1 << 20;

/// Generator bound to one dataset configuration.
///
/// Holds no RNG of its own: the random source is passed to `generate`, so a
/// single seeded RNG can drive a whole run.
pub struct SalesGenerator<'a> {
    config: &'a DatasetConfig,
    sales: Uniform<i64>,
    forecast_band: Uniform<f64>,
    processing_time: Normal<f64>,
}

impl<'a> SalesGenerator<'a> {
    pub fn new(config: &'a DatasetConfig) -> Result<Self, DashError> {
        config.validate()?;
        let processing_time = Normal::new(config.processing_mean, config.processing_sd)
            .map_err(|e| DashError::InvalidConfig(format!("processing time: {e}")))?;
        Ok(Self {
            config,
            sales: Uniform::new(config.sales_min, config.sales_max),
            forecast_band: Uniform::new_inclusive(config.forecast_low, config.forecast_high),
            processing_time,
        })
    }

    /// Generate the full record sequence.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<TransactionRecord>, DashError> {
        let len = self.config.expected_len()?;
        let mut records = Vec::with_capacity(len.min(MAX_PREALLOCATED_RECORDS));
        for month in &self.config.months {
            for category in &self.config.categories {
                for region in &self.config.regions {
                    for _ in 0..self.config.trials {
                        records.push(self.draw(month, category, region, rng)?);
                    }
                }
            }
        }
        tracing::debug!(records = records.len(), "generated sales records");
        Ok(records)
    }

    /// Draw one record. Draw order is sales, forecast multiplier, processing time.
    fn draw<R: Rng + ?Sized>(
        &self,
        month: &str,
        category: &str,
        region: &Region,
        rng: &mut R,
    ) -> Result<TransactionRecord, DashError> {
        let sales = self.sales.sample(rng);
        let multiplier = self.forecast_band.sample(rng);
        let forecast = (sales as f64 * multiplier).round() as i64;
        let variance_pct = variance_pct(sales, forecast)?;
        let order_processing_time = self.processing_time.sample(rng);

        Ok(TransactionRecord {
            month: month.to_string(),
            product_category: category.to_string(),
            region: region.name.clone(),
            latitude: region.lat,
            longitude: region.lon,
            sales,
            forecast,
            variance_pct,
            order_processing_time,
        })
    }
}

/// `(sales - forecast) / forecast * 100`, refusing a zero forecast.
pub fn variance_pct(sales: i64, forecast: i64) -> Result<f64, DashError> {
    if forecast == 0 {
        return Err(DashError::InvalidForecast { sales, forecast });
    }
    Ok((sales - forecast) as f64 / forecast as f64 * 100.0)
}
