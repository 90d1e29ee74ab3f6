/// Column and key constants for the generated files.
/// Single source of truth - shared by writers, readers and the Python module.

// ── Sales table columns ─────────────────────────────────────────────────────
pub mod sales {
    pub const MONTH: &str = "Month";
    pub const PRODUCT: &str = "Product";
    pub const REGION: &str = "Region";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const SALES: &str = "Sales";
    pub const FORECAST: &str = "Forecast";
    pub const VARIANCE_PCT: &str = "VariancePct";
    pub const ORDER_PROCESSING_TIME: &str = "OrderProcessingTime";

    /// Column order of `sales_data.csv`.
    pub const ALL: [&str; 9] = [
        MONTH,
        PRODUCT,
        REGION,
        LATITUDE,
        LONGITUDE,
        SALES,
        FORECAST,
        VARIANCE_PCT,
        ORDER_PROCESSING_TIME,
    ];
}

// ── KPI summary keys ────────────────────────────────────────────────────────
pub mod kpi {
    pub const ACTUALS_THIS_PERIOD: &str = "actuals_this_period(in_$k)";
    pub const VARIANCE_TO_FORECAST: &str = "variance_(to_forecast)";
    pub const PERIOD_OVER_PERIOD: &str = "period_over_period";
    pub const ORDER_PROCESSING_TIME: &str = "order_processing_time";

    pub const ALL: [&str; 4] = [
        ACTUALS_THIS_PERIOD,
        VARIANCE_TO_FORECAST,
        PERIOD_OVER_PERIOD,
        ORDER_PROCESSING_TIME,
    ];
}

// ── Output file names ───────────────────────────────────────────────────────
pub mod files {
    pub const SALES_DATA: &str = "sales_data.csv";
    pub const KPI_SUMMARY: &str = "kpi_summary.json";
    pub const DASHBOARD: &str = "dashboard.html";
    pub const CONFIG: &str = "sales_dashkit.toml";
}
