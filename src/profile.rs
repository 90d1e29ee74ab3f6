use polars::prelude::*;

use crate::error::DashError;
use crate::schema::sales;

/// Headline numbers of a generated sales table.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetProfile {
    pub rows: usize,
    pub total_sales: i64,
    pub total_forecast: i64,
    /// Sales per month, in first-seen (fiscal) order
    pub sales_by_month: Vec<(String, i64)>,
}

impl DatasetProfile {
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, DashError> {
        let total_sales = df.column(sales::SALES)?.i64()?.sum().unwrap_or(0);
        let total_forecast = df.column(sales::FORECAST)?.i64()?.sum().unwrap_or(0);

        let grouped = df
            .clone()
            .lazy()
            .group_by_stable([col(sales::MONTH)])
            .agg([col(sales::SALES).sum()])
            .collect()?;
        let months = grouped.column(sales::MONTH)?.str()?;
        let sums = grouped.column(sales::SALES)?.i64()?;
        let sales_by_month = months
            .into_iter()
            .zip(sums)
            .filter_map(|(m, s)| Some((m?.to_string(), s.unwrap_or(0))))
            .collect();

        Ok(Self {
            rows: df.height(),
            total_sales,
            total_forecast,
            sales_by_month,
        })
    }

    /// Total variance to forecast, percent. None for an empty table.
    pub fn variance_pct(&self) -> Option<f64> {
        if self.total_forecast == 0 {
            return None;
        }
        Some((self.total_sales - self.total_forecast) as f64 / self.total_forecast as f64 * 100.0)
    }

    pub fn log(&self) {
        tracing::info!(
            rows = self.rows,
            total_sales = self.total_sales,
            total_forecast = self.total_forecast,
            variance_pct = self.variance_pct().unwrap_or(0.0),
            "dataset profile"
        );
        for (month, total) in &self.sales_by_month {
            tracing::debug!(month = %month, sales = total, "monthly sales");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{records_to_dataframe, TransactionRecord};

    fn record(month: &str, sales: i64, forecast: i64) -> TransactionRecord {
        TransactionRecord {
            month: month.to_string(),
            product_category: "Soup".to_string(),
            region: "Africa".to_string(),
            latitude: -1.2921,
            longitude: 36.8219,
            sales,
            forecast,
            variance_pct: (sales - forecast) as f64 / forecast as f64 * 100.0,
            order_processing_time: 30.0,
        }
    }

    #[test]
    fn test_profile_totals_and_month_order() {
        let df = records_to_dataframe(&[
            record("Apr", 100, 90),
            record("May", 200, 210),
            record("Apr", 300, 300),
            record("Jan", 50, 50),
        ])
        .unwrap();
        let profile = DatasetProfile::from_dataframe(&df).unwrap();
        assert_eq!(profile.rows, 4);
        assert_eq!(profile.total_sales, 650);
        assert_eq!(profile.total_forecast, 650);
        assert_eq!(profile.variance_pct(), Some(0.0));
        assert_eq!(
            profile.sales_by_month,
            vec![
                ("Apr".to_string(), 400),
                ("May".to_string(), 200),
                ("Jan".to_string(), 50)
            ]
        );
    }

    #[test]
    fn test_empty_profile() {
        let df = records_to_dataframe(&[]).unwrap();
        let profile = DatasetProfile::from_dataframe(&df).unwrap();
        assert_eq!(profile.rows, 0);
        assert_eq!(profile.variance_pct(), None);
        assert!(profile.sales_by_month.is_empty());
    }
}
