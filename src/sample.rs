//! Presentation data for the dashboard.
//!
//! Hard-coded and independent of the generated sales table: the renderer
//! never reads `sales_data.csv`.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

use crate::error::DashError;

pub const DARK_GREEN: &str = "#685b28";
pub const DARK_PINK: &str = "#c94a65";

/// Monthly sales for the trend chart, fiscal order.
pub const TREND_VALUES: [f64; 12] = [
    8_000_000.0,
    7_200_000.0,
    7_400_000.0,
    8_000_000.0,
    7_900_000.0,
    7_600_000.0,
    7_500_000.0,
    7_400_000.0,
    7_300_000.0,
    7_200_000.0,
    7_100_000.0,
    7_000_000.0,
];

/// A product category with its sales total and chart color.
#[derive(Debug, Clone, Copy)]
pub struct ProductSample {
    pub name: &'static str,
    pub sales: f64,
    pub color: &'static str,
}

pub const PRODUCTS: [ProductSample; 5] = [
    ProductSample { name: "Pasta & Pizza", sales: 25_000_000.0, color: DARK_GREEN },
    ProductSample { name: "Canned Goods", sales: 18_000_000.0, color: DARK_PINK },
    ProductSample { name: "Soup", sales: 12_000_000.0, color: DARK_PINK },
    ProductSample { name: "Condiments", sales: 10_000_000.0, color: DARK_GREEN },
    ProductSample { name: "Coffee & Snacks", sales: 9_000_000.0, color: DARK_GREEN },
];

/// A cloud of map points jittered around a center.
#[derive(Debug, Clone, Copy)]
pub struct Cluster {
    pub region: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub lat_spread: f64,
    pub lon_spread: f64,
    pub count: usize,
}

const fn cluster(
    region: &'static str,
    lat: f64,
    lon: f64,
    lat_spread: f64,
    lon_spread: f64,
    count: usize,
) -> Cluster {
    Cluster {
        region,
        lat,
        lon,
        lat_spread,
        lon_spread,
        count,
    }
}

pub const CLUSTERS: [Cluster; 10] = [
    // west, central and east North America, then northern Europe
    cluster("North America", 37.5, -122.0, 2.0, 2.0, 120),
    cluster("North America", 29.0, -98.0, 3.0, 5.0, 100),
    cluster("North America", 40.0, -75.0, 5.0, 5.0, 80),
    cluster("Europe", 55.0, 10.0, 2.0, 10.0, 80),
    cluster("North America", 40.7128, -74.0060, 1.2, 1.2, 40),
    cluster("Europe", 48.8566, 2.3522, 1.2, 1.2, 40),
    cluster("South America", -23.5505, -46.6333, 1.5, 1.5, 20),
    cluster("Asia", 35.6895, 139.6917, 1.5, 1.5, 20),
    cluster("Africa", -1.2921, 36.8219, 1.5, 1.5, 20),
    cluster("Australia", -33.8688, 151.2093, 1.5, 1.5, 20),
];

/// Map point sales are uniform in [100_000, 500_000].
pub const REGION_SALES_RANGE: (i64, i64) = (100_000, 500_000);

/// Mean and standard deviation of scatter variance, percent.
pub const SCATTER_VARIANCE: (f64, f64) = (100.0, 8.0);

/// Points per product in the variance scatter.
pub const SCATTER_POINTS_PER_PRODUCT: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionPoint {
    pub region: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub sales: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub product: &'static str,
    pub sales: f64,
    pub variance_pct: f64,
}

/// Draw every cluster's points, in `CLUSTERS` order.
pub fn region_points<R: Rng + ?Sized>(rng: &mut R) -> Vec<RegionPoint> {
    let sales = Uniform::new_inclusive(REGION_SALES_RANGE.0, REGION_SALES_RANGE.1);
    let total = CLUSTERS.iter().map(|c| c.count).sum::<usize>();
    let mut points = Vec::with_capacity(total);
    for c in &CLUSTERS {
        let lat = Uniform::new_inclusive(-c.lat_spread, c.lat_spread);
        let lon = Uniform::new_inclusive(-c.lon_spread, c.lon_spread);
        for _ in 0..c.count {
            points.push(RegionPoint {
                region: c.region,
                lat: c.lat + lat.sample(rng),
                lon: c.lon + lon.sample(rng),
                sales: sales.sample(rng),
            });
        }
    }
    points
}

/// Sales uniform in [0, 500), variance from N(100, 8), per product.
pub fn scatter_points<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<ScatterPoint>, DashError> {
    let sales = Uniform::new(0.0, 500.0);
    let variance = Normal::new(SCATTER_VARIANCE.0, SCATTER_VARIANCE.1)
        .map_err(|e| DashError::InvalidConfig(format!("scatter variance: {e}")))?;
    let mut points = Vec::with_capacity(PRODUCTS.len() * SCATTER_POINTS_PER_PRODUCT);
    for p in &PRODUCTS {
        for _ in 0..SCATTER_POINTS_PER_PRODUCT {
            points.push(ScatterPoint {
                product: p.name,
                sales: sales.sample(rng),
                variance_pct: variance.sample(rng),
            });
        }
    }
    Ok(points)
}
