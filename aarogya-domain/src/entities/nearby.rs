use serde::{Deserialize, Serialize};

/// Current weather at a coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// True during daylight hours at the location
    pub is_day: bool,
}

/// A hospital near the requested coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    /// OpenStreetMap node identifier
    pub id: i64,
    /// Hospital name when tagged
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
}
