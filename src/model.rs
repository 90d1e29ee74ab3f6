use polars::prelude::*;

use crate::schema::sales;

/// One row of the generated sales table.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub month: String,
    pub product_category: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sales: i64,
    pub forecast: i64,
    pub variance_pct: f64,
    /// Not clamped, negative draws are kept
    pub order_processing_time: f64,
}

/// Build the sales DataFrame, columns in `schema::sales::ALL` order.
pub fn records_to_dataframe(records: &[TransactionRecord]) -> PolarsResult<DataFrame> {
    let n = records.len();
    let mut months = Vec::with_capacity(n);
    let mut products = Vec::with_capacity(n);
    let mut regions = Vec::with_capacity(n);
    let mut lats = Vec::with_capacity(n);
    let mut lons = Vec::with_capacity(n);
    let mut sales_vals = Vec::with_capacity(n);
    let mut forecasts = Vec::with_capacity(n);
    let mut variances = Vec::with_capacity(n);
    let mut processing = Vec::with_capacity(n);

    for r in records {
        months.push(r.month.as_str());
        products.push(r.product_category.as_str());
        regions.push(r.region.as_str());
        lats.push(r.latitude);
        lons.push(r.longitude);
        sales_vals.push(r.sales);
        forecasts.push(r.forecast);
        variances.push(r.variance_pct);
        processing.push(r.order_processing_time);
    }

    DataFrame::new(vec![
        Column::new(sales::MONTH.into(), months),
        Column::new(sales::PRODUCT.into(), products),
        Column::new(sales::REGION.into(), regions),
        Column::new(sales::LATITUDE.into(), lats),
        Column::new(sales::LONGITUDE.into(), lons),
        Column::new(sales::SALES.into(), sales_vals),
        Column::new(sales::FORECAST.into(), forecasts),
        Column::new(sales::VARIANCE_PCT.into(), variances),
        Column::new(sales::ORDER_PROCESSING_TIME.into(), processing),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: &str, sales: i64, forecast: i64) -> TransactionRecord {
        TransactionRecord {
            month: month.to_string(),
            product_category: "Soup".to_string(),
            region: "Asia".to_string(),
            latitude: 35.6895,
            longitude: 139.6917,
            sales,
            forecast,
            variance_pct: (sales - forecast) as f64 / forecast as f64 * 100.0,
            order_processing_time: -1.5,
        }
    }

    #[test]
    fn test_dataframe_columns_in_order() {
        let df = records_to_dataframe(&[record("Apr", 100_000, 101_000)]).unwrap();
        let names: Vec<&str> = df.get_column_names_str();
        assert_eq!(names, sales::ALL.to_vec());
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn test_dataframe_values() {
        let df = records_to_dataframe(&[
            record("Apr", 100_000, 101_000),
            record("May", 50_000, 49_000),
        ])
        .unwrap();
        let months = df.column(sales::MONTH).unwrap().str().unwrap();
        assert_eq!(months.get(1), Some("May"));
        let forecasts = df.column(sales::FORECAST).unwrap().i64().unwrap();
        assert_eq!(forecasts.get(0), Some(101_000));
        let processing = df
            .column(sales::ORDER_PROCESSING_TIME)
            .unwrap()
            .f64()
            .unwrap();
        assert_eq!(processing.get(1), Some(-1.5));
    }

    #[test]
    fn test_empty_dataframe_keeps_schema() {
        let df = records_to_dataframe(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), sales::ALL.len());
    }
}
