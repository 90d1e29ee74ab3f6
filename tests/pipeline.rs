use std::fs;
use std::path::Path;

use sales_dashkit::output::read_sales_csv;
use sales_dashkit::pipeline::{run_dashboard, run_data_generation};
use sales_dashkit::schema::{files, kpi, sales};
use sales_dashkit::AppConfig;

fn config_in(dir: &Path) -> AppConfig {
    AppConfig {
        data_dir: dir.join("data"),
        output_dir: dir.join("outputs"),
        ..AppConfig::default()
    }
}

#[test]
fn generation_writes_full_table_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let report = run_data_generation(&config).unwrap();

    assert_eq!(report.sales_csv, dir.path().join("data").join(files::SALES_DATA));
    assert_eq!(report.profile.rows, 10_800);
    assert_eq!(report.profile.sales_by_month.len(), 12);
    assert_eq!(report.profile.sales_by_month[0].0, "Apr");
    assert_eq!(report.profile.sales_by_month[11].0, "Mar");

    let text = fs::read_to_string(&report.sales_csv).unwrap();
    assert_eq!(text.lines().count(), 10_801);
    assert_eq!(text.lines().next().unwrap(), sales::ALL.join(","));

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report.kpi_summary).unwrap()).unwrap();
    let keys: Vec<&str> = summary
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    let mut expected = kpi::ALL.to_vec();
    expected.sort_unstable();
    let mut keys_sorted = keys.clone();
    keys_sorted.sort_unstable();
    assert_eq!(keys_sorted, expected);
}

#[test]
fn same_seed_gives_identical_csv() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let ra = run_data_generation(&config_in(a.path())).unwrap();
    let rb = run_data_generation(&config_in(b.path())).unwrap();
    assert_eq!(
        fs::read(&ra.sales_csv).unwrap(),
        fs::read(&rb.sales_csv).unwrap()
    );
}

#[test]
fn csv_columns_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_data_generation(&config_in(dir.path())).unwrap();
    let df = read_sales_csv(&report.sales_csv).unwrap();
    assert_eq!(df.height(), 10_800);

    let sales_col = df.column(sales::SALES).unwrap().i64().unwrap();
    let forecast_col = df.column(sales::FORECAST).unwrap().i64().unwrap();
    let variance_col = df.column(sales::VARIANCE_PCT).unwrap().f64().unwrap();

    for ((s, f), v) in sales_col
        .into_iter()
        .zip(forecast_col.into_iter())
        .zip(variance_col.into_iter())
    {
        let (s, f, v) = (s.unwrap(), f.unwrap(), v.unwrap());
        assert!((10_000..500_000).contains(&s));
        assert!((f - s).abs() as f64 <= s as f64 * 0.03 + 0.5);
        let recomputed = (s - f) as f64 / f as f64 * 100.0;
        assert!((recomputed - v).abs() < 1e-9, "{recomputed} vs {v}");
    }
}

#[test]
fn single_cell_scenario_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::from_toml_str(
        r#"
        seed = 1

        [dataset]
        months = ["Apr"]
        categories = ["Soup"]
        trials = 1

        [[dataset.regions]]
        region = "Asia"
        lat = 35.6895
        lon = 139.6917
        "#,
    )
    .unwrap();
    config.data_dir = dir.path().join("data");

    let report = run_data_generation(&config).unwrap();
    let text = fs::read_to_string(&report.sales_csv).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Apr,Soup,Asia,35.6895,139.6917,"));
}

#[test]
fn dashboard_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let path = run_dashboard(&config).unwrap();

    assert_eq!(path, dir.path().join("outputs").join(files::DASHBOARD));
    let html = fs::read_to_string(path).unwrap();
    assert!(html.contains("Sales Trend"));
    assert!(html.contains("Sales by Product"));
    assert!(html.contains("Sales by Region"));
    assert!(html.contains("Sales / Variance Scatter by Product"));
    assert!(html.contains("$7,165"));
    // the renderer never needs the generated data
    assert!(!dir.path().join("data").exists());
}

#[test]
fn entropy_switch_unpins_the_dataset() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let entropy = |dir: &Path| AppConfig {
        entropy: true,
        ..config_in(dir)
    };
    let ra = run_data_generation(&entropy(a.path())).unwrap();
    let rb = run_data_generation(&entropy(b.path())).unwrap();
    assert_ne!(
        fs::read(&ra.sales_csv).unwrap(),
        fs::read(&rb.sales_csv).unwrap()
    );
}
