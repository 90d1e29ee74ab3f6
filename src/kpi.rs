//! Headline KPIs shared by the JSON summary and the dashboard cards.

use serde::{Deserialize, Serialize};

use crate::schema::kpi;

/// The four top-level KPIs. Constants, not derived from the generated table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct KpiSummary {
    /// Actual sales this period, in thousands of dollars
    pub actuals_k: u64,
    /// Variance to forecast, percent
    pub variance_pct: f64,
    /// Period-over-period change, percent
    pub period_over_period_pct: f64,
    /// Average order processing time
    pub order_processing_time: f64,
}

impl Default for KpiSummary {
    fn default() -> Self {
        Self {
            actuals_k: 7165,
            variance_pct: 99.4,
            period_over_period_pct: 9.4,
            order_processing_time: 30.2,
        }
    }
}

/// On-disk shape of `kpi_summary.json`.
#[derive(Debug, Serialize)]
pub struct KpiDocument {
    #[serde(rename = "actuals_this_period(in_$k)")]
    pub actuals_this_period: String,
    #[serde(rename = "variance_(to_forecast)")]
    pub variance_to_forecast: String,
    pub period_over_period: String,
    pub order_processing_time: f64,
}

/// One KPI card on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
}

impl KpiSummary {
    pub fn document(&self) -> KpiDocument {
        KpiDocument {
            actuals_this_period: self.actuals_k.to_string(),
            variance_to_forecast: format!("{:.1}%", self.variance_pct),
            period_over_period: format!("{:.1}%", self.period_over_period_pct),
            order_processing_time: self.order_processing_time,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.document())
    }

    /// Cards in display order.
    pub fn cards(&self) -> [KpiCard; 4] {
        [
            KpiCard {
                title: "ACTUALS: THIS PERIOD (in $K)",
                value: format!("${}", thousands(self.actuals_k)),
            },
            KpiCard {
                title: "VARIANCE (TO FORECAST)",
                value: format!("{:.1}%", self.variance_pct),
            },
            KpiCard {
                title: "PERIOD OVER PERIOD",
                value: format!("{:.1}%", self.period_over_period_pct),
            },
            KpiCard {
                title: "ORDER PROCESSING TIME",
                value: format!("{:.1}", self.order_processing_time),
            },
        ]
    }
}

/// Keys of the summary document, in file order.
pub fn keys() -> &'static [&'static str; 4] {
    &kpi::ALL
}

fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
