//! Plotly figure specifications for the dashboard.
//!
//! Each builder returns a `Figure` that serializes to the plotly.js
//! `{ data, layout }` shape; the HTML shell in `dashboard` embeds it as JSON.

use serde::Serialize;

use crate::sample::{
    ProductSample, RegionPoint, ScatterPoint, DARK_GREEN, DARK_PINK, PRODUCTS, TREND_VALUES,
};

// ── Figure types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Scattergeo(GeoTrace),
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Values {
    Labels(Vec<String>),
    Numbers(Vec<f64>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    pub x: Values,
    pub y: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    pub marker: Marker,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    pub x: Values,
    pub y: Values,
    pub mode: &'static str,
    pub name: String,
    pub marker: Marker,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoTrace {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub mode: &'static str,
    pub hovertext: Vec<String>,
    pub showlegend: bool,
    pub marker: Marker,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<OneOrMany<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<&'static str>,
    pub margin: Margin,
    pub font: Font,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    pub font: Font,
    pub x: f64,
    pub xanchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zerolinecolor: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub projection: Projection,
    pub showland: bool,
    pub landcolor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub line: Line,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub showarrow: bool,
    pub font: Font,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub bordercolor: &'static str,
    pub borderwidth: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

// ── Shared styling ──────────────────────────────────────────────────────────

/// Styling applied to every chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub font: String,
    pub height: u32,
}

/// A titled chart ready for embedding.
#[derive(Debug, Clone)]
pub struct Chart {
    pub title: &'static str,
    pub figure: Figure,
}

const SALES_TREND: &str = "Sales Trend";
const SALES_BY_PRODUCT: &str = "Sales by Product";
const SALES_BY_REGION: &str = "Sales by Region";
const VARIANCE_SCATTER: &str = "Sales / Variance Scatter by Product";

/// Largest marker diameter on the region map, in pixels.
const GEO_SIZE_MAX: f64 = 10.0;

impl ChartStyle {
    fn font(&self) -> Font {
        Font {
            family: self.font.clone(),
            color: Some("#000"),
            size: None,
        }
    }

    /// Layout with the bold left-aligned title, white background and margins.
    fn layout(&self, title: &str, margin: Margin) -> Layout {
        Layout {
            title: Title {
                text: format!("<b>{title}</b>"),
                font: Font {
                    size: Some(18),
                    ..self.font()
                },
                x: 0.01,
                xanchor: "left",
            },
            xaxis: None,
            yaxis: None,
            geo: None,
            shapes: Vec::new(),
            annotations: Vec::new(),
            legend: None,
            showlegend: None,
            plot_bgcolor: Some("white"),
            paper_bgcolor: Some("white"),
            margin,
            font: self.font(),
            height: self.height,
        }
    }
}

fn chart_margin() -> Margin {
    Margin {
        t: 40,
        b: 40,
        l: 40,
        r: 20,
    }
}

fn ticks(vals: &[f64], text: &[&str]) -> (Option<Vec<f64>>, Option<Vec<String>>) {
    (
        Some(vals.to_vec()),
        Some(text.iter().map(|s| s.to_string()).collect()),
    )
}

// ── Builders ────────────────────────────────────────────────────────────────

/// Monthly bars, alternating dark green and dark pink.
pub fn sales_trend(style: &ChartStyle, months: &[String]) -> Chart {
    let colors = (0..months.len())
        .map(|i| (if i % 2 == 0 { DARK_GREEN } else { DARK_PINK }).to_string())
        .collect();
    let (tickvals, ticktext) = ticks(&[0.0, 4_000_000.0, 8_000_000.0], &["0", "4M", "8M"]);

    let mut layout = style.layout(SALES_TREND, chart_margin());
    layout.xaxis = Some(Axis {
        tickangle: Some(-30),
        ..Axis::default()
    });
    layout.yaxis = Some(Axis {
        tickvals,
        ticktext,
        range: Some([0.0, 8_500_000.0]),
        ..Axis::default()
    });

    Chart {
        title: SALES_TREND,
        figure: Figure {
            data: vec![Trace::Bar(BarTrace {
                x: Values::Labels(months.to_vec()),
                y: Values::Numbers(TREND_VALUES.iter().take(months.len()).copied().collect()),
                orientation: None,
                width: Some(0.6),
                marker: Marker {
                    color: Some(OneOrMany::Many(colors)),
                    ..Marker::default()
                },
            })],
            layout,
        },
    }
}

/// Horizontal bars, largest category on top.
pub fn sales_by_product(style: &ChartStyle, products: &[ProductSample]) -> Chart {
    let (tickvals, ticktext) = ticks(
        &[
            0.0,
            5_000_000.0,
            10_000_000.0,
            15_000_000.0,
            20_000_000.0,
            25_000_000.0,
            30_000_000.0,
        ],
        &["0", "5M", "10M", "15M", "20M", "25M", "30M"],
    );

    let mut layout = style.layout(SALES_BY_PRODUCT, chart_margin());
    layout.xaxis = Some(Axis {
        tickvals,
        ticktext,
        range: Some([0.0, 30_000_000.0]),
        showgrid: Some(false),
        ..Axis::default()
    });
    layout.yaxis = Some(Axis {
        autorange: Some("reversed"),
        ..Axis::default()
    });
    layout.showlegend = Some(false);

    Chart {
        title: SALES_BY_PRODUCT,
        figure: Figure {
            data: vec![Trace::Bar(BarTrace {
                x: Values::Numbers(products.iter().map(|p| p.sales).collect()),
                y: Values::Labels(products.iter().map(|p| p.name.to_string()).collect()),
                orientation: Some("h"),
                width: None,
                marker: Marker {
                    color: Some(OneOrMany::Many(
                        products.iter().map(|p| p.color.to_string()).collect(),
                    )),
                    ..Marker::default()
                },
            })],
            layout,
        },
    }
}

/// Bubble map, marker area proportional to sales.
pub fn sales_by_region(style: &ChartStyle, points: &[RegionPoint]) -> Chart {
    let max_sales = points.iter().map(|p| p.sales).max().unwrap_or(1).max(1) as f64;
    // area sizing: the largest point gets a GEO_SIZE_MAX diameter
    let sizeref = 2.0 * max_sales / (GEO_SIZE_MAX * GEO_SIZE_MAX);

    let mut layout = style.layout(
        SALES_BY_REGION,
        Margin {
            t: 40,
            b: 20,
            l: 20,
            r: 20,
        },
    );
    layout.plot_bgcolor = None;
    layout.paper_bgcolor = None;
    layout.geo = Some(Geo {
        projection: Projection {
            kind: "natural earth",
        },
        showland: true,
        landcolor: "lightgray",
    });

    Chart {
        title: SALES_BY_REGION,
        figure: Figure {
            data: vec![Trace::Scattergeo(GeoTrace {
                lat: points.iter().map(|p| p.lat).collect(),
                lon: points.iter().map(|p| p.lon).collect(),
                mode: "markers",
                hovertext: points.iter().map(|p| p.region.to_string()).collect(),
                showlegend: false,
                marker: Marker {
                    color: Some(OneOrMany::One("#1f77b4".to_string())),
                    size: Some(OneOrMany::Many(
                        points.iter().map(|p| p.sales as f64).collect(),
                    )),
                    sizemode: Some("area"),
                    sizeref: Some(sizeref),
                    opacity: Some(0.7),
                },
            })],
            layout,
        },
    }
}

/// One marker trace per product, with reference lines at 100 %.
pub fn variance_scatter(
    style: &ChartStyle,
    products: &[ProductSample],
    points: &[ScatterPoint],
) -> Chart {
    let data = products
        .iter()
        .map(|product| {
            let (x, y): (Vec<f64>, Vec<f64>) = points
                .iter()
                .filter(|p| p.product == product.name)
                .map(|p| (p.sales, p.variance_pct))
                .unzip();
            Trace::Scatter(ScatterTrace {
                x: Values::Numbers(x),
                y: Values::Numbers(y),
                mode: "markers",
                name: product.name.to_string(),
                marker: Marker {
                    color: Some(OneOrMany::One(product.color.to_string())),
                    size: Some(OneOrMany::One(12.0)),
                    ..Marker::default()
                },
            })
        })
        .collect();

    let gray_line = |x0, x1, y0, y1| Shape {
        kind: "line",
        x0,
        x1,
        y0,
        y1,
        line: Line {
            color: "gray",
            width: 2.0,
        },
    };
    let (x_tickvals, x_ticktext) = ticks(
        &[-100.0, 0.0, 100.0, 200.0, 300.0, 400.0, 500.0],
        &["-100", "0", "100", "200", "300", "400", "500"],
    );
    let (y_tickvals, y_ticktext) = ticks(&[80.0, 100.0, 120.0], &["80%", "100%", "120%"]);

    let mut layout = style.layout(VARIANCE_SCATTER, chart_margin());
    layout.xaxis = Some(Axis {
        tickvals: x_tickvals,
        ticktext: x_ticktext,
        range: Some([-100.0, 500.0]),
        showgrid: Some(false),
        ..Axis::default()
    });
    layout.yaxis = Some(Axis {
        tickvals: y_tickvals,
        ticktext: y_ticktext,
        range: Some([80.0, 125.0]),
        zeroline: Some(true),
        zerolinecolor: Some("black"),
        showgrid: Some(false),
        ..Axis::default()
    });
    layout.shapes = vec![
        gray_line(-100.0, 500.0, 100.0, 100.0),
        gray_line(100.0, 100.0, 80.0, 120.0),
    ];
    layout.annotations = vec![Annotation {
        x: 100.0,
        y: 125.0,
        text: "$K(95.44)".to_string(),
        showarrow: false,
        font: Font {
            family: style.font.clone(),
            color: Some("gray"),
            size: Some(13),
        },
        xanchor: "center",
        yanchor: "bottom",
    }];
    layout.legend = Some(Legend {
        bordercolor: "black",
        borderwidth: 1,
    });

    Chart {
        title: VARIANCE_SCATTER,
        figure: Figure { data, layout },
    }
}

/// All dashboard charts in page order.
pub fn dashboard_charts(
    style: &ChartStyle,
    months: &[String],
    region_points: &[RegionPoint],
    scatter_points: &[ScatterPoint],
) -> Vec<Chart> {
    vec![
        sales_trend(style, months),
        sales_by_product(style, &PRODUCTS),
        sales_by_region(style, region_points),
        variance_scatter(style, &PRODUCTS, scatter_points),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fiscal_months;
    use chrono::Month;
    use serde_json::{json, Value};

    fn style() -> ChartStyle {
        ChartStyle {
            font: "Arial, sans-serif".to_string(),
            height: 400,
        }
    }

    fn to_value(chart: &Chart) -> Value {
        serde_json::to_value(&chart.figure).unwrap()
    }

    #[test]
    fn test_trend_alternates_colors() {
        let chart = sales_trend(&style(), &fiscal_months(Month::April));
        let v = to_value(&chart);
        assert_eq!(v["data"][0]["type"], "bar");
        assert_eq!(v["data"][0]["x"][0], "Apr");
        assert_eq!(v["data"][0]["x"][11], "Mar");
        assert_eq!(v["data"][0]["marker"]["color"][0], DARK_GREEN);
        assert_eq!(v["data"][0]["marker"]["color"][1], DARK_PINK);
        assert_eq!(v["data"][0]["width"], 0.6);
        assert_eq!(v["layout"]["yaxis"]["ticktext"], json!(["0", "4M", "8M"]));
        assert_eq!(v["layout"]["xaxis"]["tickangle"], -30);
        assert_eq!(v["layout"]["title"]["text"], "<b>Sales Trend</b>");
        assert_eq!(v["layout"]["height"], 400);
    }

    #[test]
    fn test_product_bars_horizontal_and_reversed() {
        let v = to_value(&sales_by_product(&style(), &PRODUCTS));
        assert_eq!(v["data"][0]["orientation"], "h");
        assert_eq!(v["data"][0]["y"][0], "Pasta & Pizza");
        assert_eq!(v["data"][0]["x"][0], 25_000_000.0);
        assert_eq!(v["layout"]["yaxis"]["autorange"], "reversed");
        assert_eq!(v["layout"]["showlegend"], false);
        assert!(v["data"][0].get("width").is_none());
    }

    #[test]
    fn test_region_map_sizes() {
        let points = vec![
            RegionPoint {
                region: "Asia",
                lat: 35.0,
                lon: 139.0,
                sales: 500_000,
            },
            RegionPoint {
                region: "Europe",
                lat: 48.0,
                lon: 2.0,
                sales: 100_000,
            },
        ];
        let v = to_value(&sales_by_region(&style(), &points));
        assert_eq!(v["data"][0]["type"], "scattergeo");
        assert_eq!(v["data"][0]["hovertext"], json!(["Asia", "Europe"]));
        assert_eq!(v["data"][0]["marker"]["sizemode"], "area");
        assert_eq!(v["data"][0]["marker"]["sizeref"], 10_000.0);
        assert_eq!(v["layout"]["geo"]["projection"]["type"], "natural earth");
        assert!(v["layout"].get("plot_bgcolor").is_none());
    }

    #[test]
    fn test_region_map_without_points() {
        let v = to_value(&sales_by_region(&style(), &[]));
        assert_eq!(v["data"][0]["lat"], json!([]));
    }

    #[test]
    fn test_scatter_one_trace_per_product() {
        let points = vec![
            ScatterPoint {
                product: "Soup",
                sales: 10.0,
                variance_pct: 101.0,
            },
            ScatterPoint {
                product: "Soup",
                sales: 20.0,
                variance_pct: 99.0,
            },
        ];
        let v = to_value(&variance_scatter(&style(), &PRODUCTS, &points));
        let data = v["data"].as_array().unwrap();
        assert_eq!(data.len(), PRODUCTS.len());
        let soup = data.iter().find(|t| t["name"] == "Soup").unwrap();
        assert_eq!(soup["x"], json!([10.0, 20.0]));
        assert_eq!(soup["mode"], "markers");
        assert_eq!(v["layout"]["shapes"].as_array().unwrap().len(), 2);
        assert_eq!(v["layout"]["annotations"][0]["text"], "$K(95.44)");
        assert_eq!(v["layout"]["yaxis"]["range"], json!([80.0, 125.0]));
    }

    #[test]
    fn test_dashboard_chart_order() {
        let charts = dashboard_charts(&style(), &fiscal_months(Month::April), &[], &[]);
        let titles: Vec<&str> = charts.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![SALES_TREND, SALES_BY_PRODUCT, SALES_BY_REGION, VARIANCE_SCATTER]
        );
    }
}
