//! File adapters: the sales CSV, the KPI summary JSON and the dashboard HTML.
//!
//! Each writer creates its target directory when missing and holds the file
//! handle only for the one write.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::*;

use crate::error::DashError;
use crate::kpi::KpiSummary;
use crate::model::{records_to_dataframe, TransactionRecord};
use crate::schema::files;

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<(), DashError> {
    if !dir.exists() {
        tracing::debug!("creating directory {}", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write `sales_data.csv` into `dir`: header row, no index column.
pub fn write_sales_csv(dir: &Path, records: &[TransactionRecord]) -> Result<PathBuf, DashError> {
    let mut df = records_to_dataframe(records)?;
    write_csv(dir, files::SALES_DATA, &mut df)
}

/// Write an arbitrary DataFrame as CSV with a header row.
pub fn write_csv(dir: &Path, filename: &str, df: &mut DataFrame) -> Result<PathBuf, DashError> {
    ensure_dir(dir)?;
    let path = dir.join(filename);
    let mut file = File::create(&path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    tracing::info!(rows = df.height(), "wrote {}", path.display());
    Ok(path)
}

/// Write `kpi_summary.json` into `dir`.
pub fn write_kpi_summary(dir: &Path, kpis: &KpiSummary) -> Result<PathBuf, DashError> {
    ensure_dir(dir)?;
    let path = dir.join(files::KPI_SUMMARY);
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer(&mut writer, &kpis.document())?;
    writer.flush()?;
    tracing::info!("wrote {}", path.display());
    Ok(path)
}

/// Write `dashboard.html` into `dir`.
pub fn write_dashboard(dir: &Path, html: &str) -> Result<PathBuf, DashError> {
    ensure_dir(dir)?;
    let path = dir.join(files::DASHBOARD);
    fs::write(&path, html)?;
    tracing::info!(bytes = html.len(), "wrote {}", path.display());
    Ok(path)
}

/// Read a sales CSV back with inferred dtypes.
pub fn read_sales_csv(path: &Path) -> Result<DataFrame, DashError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{kpi, sales};

    fn record(sales: i64, forecast: i64) -> TransactionRecord {
        TransactionRecord {
            month: "Apr".to_string(),
            product_category: "Pasta & Pizza".to_string(),
            region: "Europe".to_string(),
            latitude: 48.8566,
            longitude: 2.3522,
            sales,
            forecast,
            variance_pct: (sales - forecast) as f64 / forecast as f64 * 100.0,
            order_processing_time: 29.5,
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sales_csv(dir.path(), &[record(100_000, 98_000), record(20_000, 20_500)])
            .unwrap();
        let text = fs::read_to_string(path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Month,Product,Region,Latitude,Longitude,Sales,Forecast,VariancePct,OrderProcessingTime")
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("Apr,Pasta & Pizza,Europe,48.8566,2.3522,100000,98000,"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("data");
        write_sales_csv(&nested, &[record(10_000, 10_100)]).unwrap();
        assert!(nested.join(files::SALES_DATA).exists());
    }

    #[test]
    fn test_csv_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sales_csv(dir.path(), &[record(100_000, 98_000)]).unwrap();
        let df = read_sales_csv(&path).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.get_column_names_str(), sales::ALL.to_vec());
        let sales_col = df.column(sales::SALES).unwrap().i64().unwrap();
        assert_eq!(sales_col.get(0), Some(100_000));
    }

    #[test]
    fn test_kpi_summary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_kpi_summary(dir.path(), &KpiSummary::default()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj[kpi::PERIOD_OVER_PERIOD], "9.4%");
    }

    #[test]
    fn test_dashboard_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dashboard(&dir.path().join("outputs"), "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
    }
}
