/// Dashboard module: static HTML page of KPI cards and plotly charts.
///
/// Produces a self-contained HTML document:
/// - a row of KPI cards built from `KpiSummary`
/// - chart panels laid out two per flex row
/// - one `Plotly.newPlot` call per chart with the figure embedded as JSON
///
/// plotly.js itself is loaded once from the configured CDN; all drawing is
/// done client-side.
use std::fmt::Write as FmtWrite;

use serde::Deserialize;
use uuid::Uuid;

use crate::charts::{Chart, ChartStyle};
use crate::error::DashError;
use crate::kpi::{KpiCard, KpiSummary};

// ── Config ──────────────────────────────────────────────────────────────────

/// Configuration for the dashboard page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page title and heading
    pub title: String,
    /// CSS font family used by the page and every chart
    pub font: String,
    /// URL of the plotly.js bundle
    pub plotly_cdn: String,
    /// Chart height in pixels
    pub chart_height: u32,
    /// Seed for the sample-data RNG (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Dashboard".to_string(),
            font: "Arial, sans-serif".to_string(),
            plotly_cdn: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
            chart_height: 400,
            seed: None,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), DashError> {
        if self.chart_height == 0 {
            return Err(DashError::InvalidConfig(
                "dashboard chart_height must be positive".to_string(),
            ));
        }
        if self.plotly_cdn.trim().is_empty() {
            return Err(DashError::InvalidConfig(
                "dashboard plotly_cdn must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            font: self.font.clone(),
            height: self.chart_height,
        }
    }
}

const CARD_VALUE_COLOR: &str = "#26c6da";
const CHARTS_PER_ROW: usize = 2;

// ── HTML generation ─────────────────────────────────────────────────────────

/// Main entry point: renders the complete HTML page.
pub fn render_dashboard(
    charts: &[Chart],
    kpis: &KpiSummary,
    config: &DashboardConfig,
) -> Result<String, DashError> {
    let mut body = String::new();

    write!(
        body,
        "<h1 style='color:#000; font-weight:bold; padding-left:30px;'>{}</h1>",
        escape_html(&config.title)
    )
    .map_err(fmt_error)?;

    body.push_str(
        "<div style='display:flex; justify-content:space-between; flex-wrap:wrap; padding:0 30px 30px;'>",
    );
    for card in kpis.cards().iter() {
        body.push_str(&kpi_card_html(card));
    }
    body.push_str("</div>");

    for (row, chunk) in charts.chunks(CHARTS_PER_ROW).enumerate() {
        let bottom = if row == 0 { "0" } else { "30px" };
        write!(
            body,
            "<div style='display:flex; flex-wrap:wrap; justify-content:space-between; gap:40px; padding:0 30px {bottom};'>"
        )
        .map_err(fmt_error)?;
        for chart in chunk {
            body.push_str(&chart_panel_html(chart, config.chart_height)?);
        }
        body.push_str("</div>");
    }

    let html = format!(
        r##"<html><head><meta charset="utf-8"><title>{title}</title><script src="{cdn}" charset="utf-8"></script></head><body style='background-color:#f8f9fa; font-family:{font};'>{body}</body></html>"##,
        title = escape_html(&config.title),
        cdn = escape_html(&config.plotly_cdn),
        font = escape_html(&config.font),
        body = body,
    );

    tracing::debug!(charts = charts.len(), bytes = html.len(), "rendered dashboard");
    Ok(html)
}

fn kpi_card_html(card: &KpiCard) -> String {
    format!(
        r##"<div style='background:#f9f9f9; padding:20px; border-radius:8px; box-shadow:0 2px 4px rgba(0,0,0,0.1); text-align:center; flex:1; margin:5px; display:inline-block;'><h4 style='font-weight:bold; color:#000; margin-bottom:5px;'><b>{title}</b></h4><h2 style='margin-top:0; color:{color}; font-size:32px; font-weight:bold;'>{value}</h2></div>"##,
        title = escape_html(card.title),
        color = CARD_VALUE_COLOR,
        value = escape_html(&card.value),
    )
}

fn chart_panel_html(chart: &Chart, height: u32) -> Result<String, DashError> {
    let div_id = Uuid::new_v4();
    let data = script_json(&serde_json::to_string(&chart.figure.data)?);
    let layout = script_json(&serde_json::to_string(&chart.figure.layout)?);
    Ok(format!(
        r##"<div style='flex:1; min-width:600px; min-height:440px; background:white; border-radius:8px; padding:20px; margin-bottom:30px; box-shadow:0 2px 4px rgba(0,0,0,0.05);' title="{title}"><div id="{div_id}" class="plotly-graph-div" style="height:{height}px; width:100%;"></div><script type="text/javascript">Plotly.newPlot("{div_id}", {data}, {layout}, {{"responsive": true}});</script></div>"##,
        title = escape_html(chart.title),
    ))
}

/// JSON is embedded in a `<script>` element; keep `</` from closing it.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn fmt_error(err: std::fmt::Error) -> DashError {
    DashError::Io(std::io::Error::other(err))
}
